//! Filter criteria and the pure query builder that turns them into the
//! outbound `/jobs` query.

use serde::{Deserialize, Serialize};

/// Employment types the board lets the user multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    /// The code the API expects in the `employment_type` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }
}

/// Salary floors the board offers, in rupees per annum. 0 means no floor.
pub const SALARY_FLOORS: [u32; 4] = [1_000_000, 2_000_000, 3_000_000, 4_000_000];

/// The active search/filter state for the job list.
///
/// `employment_types` is an insertion-ordered set: `Vec` plus a membership
/// check, so the serialized csv reflects the order the user picked types in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub employment_types: Vec<EmploymentType>,
    pub min_salary: u32,
    pub search_term: String,
}

/// A normalized `/jobs` query. Value-equality (`PartialEq`) is what the
/// re-fetch subscription compares, so two criteria that serialize the same
/// way never trigger a duplicate fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub employment_type: String,
    pub minimum_package: u32,
    pub search: String,
}

impl QueryDescriptor {
    /// Query pairs in the fixed order the API documents. URL encoding is
    /// left to the HTTP layer.
    pub fn as_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("employment_type", self.employment_type.clone()),
            ("minimum_package", self.minimum_package.to_string()),
            ("search", self.search.clone()),
        ]
    }

    /// Canonical query-string rendering, used for logging and tests.
    pub fn to_query_string(&self) -> String {
        format!(
            "employment_type={}&minimum_package={}&search={}",
            self.employment_type, self.minimum_package, self.search
        )
    }
}

/// Builds the outbound query from the current criteria. Pure and
/// deterministic: no I/O, no clock, no randomness.
///
/// An empty employment-type set serializes to an empty string, meaning "no
/// employment-type constraint" (not "match nothing"); `min_salary` 0 means
/// "no minimum"; an empty search term means "no keyword constraint". The
/// server ANDs whatever constraints are present.
pub fn build_jobs_query(criteria: &FilterCriteria) -> QueryDescriptor {
    let employment_type = criteria
        .employment_types
        .iter()
        .map(|t| t.code())
        .collect::<Vec<_>>()
        .join(",");

    QueryDescriptor {
        employment_type,
        minimum_package: criteria.min_salary,
        search: criteria.search_term.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_criteria_build_empty_query() {
        let query = build_jobs_query(&FilterCriteria::default());
        assert_eq!(query.employment_type, "");
        assert_eq!(query.minimum_package, 0);
        assert_eq!(query.search, "");
        assert_eq!(query.to_query_string(), "employment_type=&minimum_package=0&search=");
    }

    #[test]
    fn test_employment_types_join_in_insertion_order() {
        let criteria = FilterCriteria {
            employment_types: vec![EmploymentType::Internship, EmploymentType::FullTime],
            ..Default::default()
        };
        let query = build_jobs_query(&criteria);
        assert_eq!(query.employment_type, "INTERNSHIP,FULLTIME");
    }

    #[test]
    fn test_search_term_passes_through_verbatim() {
        let criteria = FilterCriteria {
            search_term: "  engineer ".to_string(),
            ..Default::default()
        };
        assert_eq!(build_jobs_query(&criteria).search, "  engineer ");
    }

    #[test]
    fn test_build_is_deterministic() {
        let criteria = FilterCriteria {
            employment_types: vec![EmploymentType::Freelance],
            min_salary: 2_000_000,
            search_term: "rust".to_string(),
        };
        assert_eq!(build_jobs_query(&criteria), build_jobs_query(&criteria));
    }
}
