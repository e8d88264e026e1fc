//! FilterState — the single owner of the active search/filter criteria.
//!
//! Every state-changing operation commits the in-memory mutation first, then
//! rebuilds the query and notifies the subscriber, so the fetch the
//! subscriber issues always reflects the just-updated criteria. Notification
//! is value-driven: the subscriber fires only when the built QueryDescriptor
//! differs from the last one delivered, never once per mutation.

use std::sync::Arc;

use tracing::debug;

use crate::query::{build_jobs_query, EmploymentType, FilterCriteria, QueryDescriptor};

/// The one downstream consumer of query changes. In production this is the
/// session wiring that re-issues the jobs fetch; tests inject a recorder.
pub trait QuerySubscriber: Send + Sync {
    fn query_changed(&self, query: &QueryDescriptor);
}

pub struct FilterState {
    criteria: FilterCriteria,
    /// Free-text buffer; folded into the criteria only on `submit_search`.
    search_buffer: String,
    last_delivered: QueryDescriptor,
    subscriber: Arc<dyn QuerySubscriber>,
}

impl FilterState {
    pub fn new(subscriber: Arc<dyn QuerySubscriber>) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            search_buffer: String::new(),
            last_delivered: build_jobs_query(&FilterCriteria::default()),
            subscriber,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The query the current committed criteria serialize to.
    pub fn query(&self) -> QueryDescriptor {
        build_jobs_query(&self.criteria)
    }

    /// Multi-select toggle: removes the type if active, appends it otherwise.
    /// Appending preserves insertion order for csv serialization.
    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType) {
        if let Some(pos) = self
            .criteria
            .employment_types
            .iter()
            .position(|t| *t == employment_type)
        {
            self.criteria.employment_types.remove(pos);
        } else {
            self.criteria.employment_types.push(employment_type);
        }
        self.notify_if_changed();
    }

    /// Radio-button semantics: at most one salary floor active at a time.
    pub fn set_salary_floor(&mut self, min_salary: u32) {
        self.criteria.min_salary = min_salary;
        self.notify_if_changed();
    }

    /// Updates the text buffer only. Search is fetch-on-submit, so this never
    /// notifies by itself.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_buffer = text.into();
    }

    /// Commits the buffered text into the criteria and notifies.
    pub fn submit_search(&mut self) {
        self.criteria.search_term = self.search_buffer.clone();
        self.notify_if_changed();
    }

    fn notify_if_changed(&mut self) {
        let query = build_jobs_query(&self.criteria);
        if query == self.last_delivered {
            debug!("filter change produced an identical query, skipping re-fetch");
            return;
        }
        self.last_delivered = query.clone();
        self.subscriber.query_changed(&query);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Records every delivered query so tests can assert both count and
    /// content per operation.
    #[derive(Default)]
    struct Recorder {
        deliveries: Mutex<Vec<QueryDescriptor>>,
    }

    impl QuerySubscriber for Recorder {
        fn query_changed(&self, query: &QueryDescriptor) {
            self.deliveries.lock().unwrap().push(query.clone());
        }
    }

    fn recorded_state() -> (FilterState, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        (FilterState::new(recorder.clone()), recorder)
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let (mut state, _recorder) = recorded_state();
        let before = state.criteria().clone();

        state.toggle_employment_type(EmploymentType::PartTime);
        assert_ne!(*state.criteria(), before);

        state.toggle_employment_type(EmploymentType::PartTime);
        assert_eq!(*state.criteria(), before);
    }

    #[test]
    fn test_toggle_fires_once_per_call() {
        let (mut state, recorder) = recorded_state();
        state.toggle_employment_type(EmploymentType::FullTime);
        state.toggle_employment_type(EmploymentType::FullTime);
        // Both calls changed the query value (add, then remove).
        assert_eq!(recorder.deliveries.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_set_salary_floor_is_idempotent() {
        let (mut state, recorder) = recorded_state();

        state.set_salary_floor(2_000_000);
        let after_first = state.criteria().clone();

        state.set_salary_floor(2_000_000);
        assert_eq!(*state.criteria(), after_first);
        // The second call produced an identical query, so no second fetch.
        assert_eq!(recorder.deliveries.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_set_search_term_does_not_fetch_until_submit() {
        let (mut state, recorder) = recorded_state();

        state.set_search_term("engineer");
        assert!(recorder.deliveries.lock().unwrap().is_empty());
        assert_eq!(state.criteria().search_term, "");

        state.submit_search();
        let deliveries = recorder.deliveries.lock().unwrap();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].search, "engineer");
    }

    #[test]
    fn test_filter_scenario_issues_one_fetch_per_step() {
        let (mut state, recorder) = recorded_state();

        state.toggle_employment_type(EmploymentType::FullTime);
        state.set_salary_floor(2_000_000);
        state.set_search_term("engineer");
        state.submit_search();

        let deliveries = recorder.deliveries.lock().unwrap();
        let rendered: Vec<String> = deliveries.iter().map(|q| q.to_query_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "employment_type=FULLTIME&minimum_package=0&search=",
                "employment_type=FULLTIME&minimum_package=2000000&search=",
                "employment_type=FULLTIME&minimum_package=2000000&search=engineer",
            ]
        );
    }

    #[test]
    fn test_resubmitting_same_search_does_not_refetch() {
        let (mut state, recorder) = recorded_state();

        state.set_search_term("rust");
        state.submit_search();
        state.submit_search();

        assert_eq!(recorder.deliveries.lock().unwrap().len(), 1);
    }
}
