//! Job posting models as the board API returns them.
//!
//! Three shapes share fields but are decoded independently: the list entry,
//! the full detail entity, and the reduced "similar job" sibling. Required
//! nested blocks (`skills`, `life_at_company`) are plain fields, not
//! `Option`s, so a response missing them fails decoding outright instead of
//! producing a half-built detail view.

use serde::Deserialize;

/// Wire envelope for `GET /jobs`.
#[derive(Debug, Deserialize)]
pub struct JobsEnvelope {
    pub jobs: Vec<JobSummary>,
}

/// One entry in the job list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub rating: f64,
    pub job_description: String,
    pub package_per_annum: String,
}

/// Wire envelope for `GET /jobs/{id}`.
#[derive(Debug, Deserialize)]
pub struct JobDetailEnvelope {
    pub job_details: JobDetail,
    pub similar_jobs: Vec<SimilarJob>,
}

/// The full detail entity for a single posting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub employment_type: String,
    pub location: String,
    pub rating: f64,
    pub job_description: String,
    pub package_per_annum: String,
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

/// Sibling posting shown under a detail view. The API sends a reduced field
/// subset here: no `package_per_annum`, no website URL.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarJob {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub rating: f64,
    pub job_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_envelope_decodes_list() {
        let body = r#"{
            "jobs": [
                {
                    "id": "d6019453-f864-4a2f-8230-6a9642a59466",
                    "title": "Devops Engineer",
                    "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/netflix-img.png",
                    "employment_type": "Internship",
                    "location": "Delhi",
                    "rating": 4,
                    "job_description": "We are looking for a DevOps Engineer.",
                    "package_per_annum": "10 LPA"
                }
            ]
        }"#;

        let envelope: JobsEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.jobs.len(), 1);
        assert_eq!(envelope.jobs[0].title, "Devops Engineer");
        assert_eq!(envelope.jobs[0].rating, 4.0);
    }

    #[test]
    fn test_jobs_envelope_accepts_empty_list() {
        let envelope: JobsEnvelope = serde_json::from_str(r#"{"jobs": []}"#).unwrap();
        assert!(envelope.jobs.is_empty());
    }

    #[test]
    fn test_job_summary_rejects_missing_field() {
        // No `package_per_annum` in a list entry is a malformed response.
        let body = r#"{
            "id": "1", "title": "x", "company_logo_url": "u",
            "employment_type": "Full Time", "location": "Delhi",
            "rating": 4, "job_description": "d"
        }"#;
        assert!(serde_json::from_str::<JobSummary>(body).is_err());
    }
}
