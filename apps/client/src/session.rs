//! Job search session — wires FilterState to the jobs ResourceLoader.
//!
//! The session installs itself as the single query subscriber: each committed
//! criteria change re-issues the jobs fetch with the query built from the
//! just-updated state. Must be used from within a Tokio runtime; re-fetches
//! run as spawned tasks so filter mutations never block.

use std::sync::Arc;

use crate::filters::{FilterState, QuerySubscriber};
use crate::loader::{FetchStatus, ResourceFetcher, ResourceLoader};
use crate::models::job::JobSummary;
use crate::query::{EmploymentType, QueryDescriptor};

/// Shown when a fetch succeeds with zero entries. Not a fixed contract;
/// override per session.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "We could not find any jobs. Try other filters";

/// Exactly one rendering branch per loader state. An empty result list is a
/// distinct branch, never a failure.
#[derive(Debug, Clone)]
pub enum JobListView {
    Loading,
    Failed,
    NoResults(String),
    Results(Arc<Vec<JobSummary>>),
}

struct Refetch<F: JobsSource> {
    loader: ResourceLoader<F>,
}

impl<F: JobsSource> QuerySubscriber for Refetch<F> {
    fn query_changed(&self, query: &QueryDescriptor) {
        let loader = self.loader.clone();
        let query = query.clone();
        tokio::spawn(async move { loader.load(query).await });
    }
}

/// Any fetcher that answers a jobs query with a job list.
pub trait JobsSource:
    ResourceFetcher<Request = QueryDescriptor, Output = Vec<JobSummary>>
{
}

impl<F> JobsSource for F where
    F: ResourceFetcher<Request = QueryDescriptor, Output = Vec<JobSummary>>
{
}

pub struct JobSearchSession<F: JobsSource> {
    filters: FilterState,
    jobs: ResourceLoader<F>,
    no_results_message: String,
}

impl<F: JobsSource> JobSearchSession<F> {
    pub fn new(fetcher: F) -> Self {
        let jobs = ResourceLoader::new(Arc::new(fetcher));
        let filters = FilterState::new(Arc::new(Refetch {
            loader: jobs.clone(),
        }));
        Self {
            filters,
            jobs,
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
        }
    }

    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Issues the initial jobs fetch with the current (unfiltered) query and
    /// waits for it, so the first observable state after mount is terminal.
    pub async fn mount(&self) {
        self.jobs.load(self.filters.query()).await;
    }

    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType) {
        self.filters.toggle_employment_type(employment_type);
    }

    pub fn set_salary_floor(&mut self, min_salary: u32) {
        self.filters.set_salary_floor(min_salary);
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.filters.set_search_term(text);
    }

    pub fn submit_search(&mut self) {
        self.filters.submit_search();
    }

    /// Re-issues the last jobs fetch after a failure.
    pub async fn retry(&self) {
        self.jobs.retry().await;
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn jobs_status(&self) -> FetchStatus<Vec<JobSummary>> {
        self.jobs.status()
    }

    /// Selects the one rendering branch for the current jobs state.
    pub fn job_list_view(&self) -> JobListView {
        match self.jobs.status() {
            // Idle only exists before the mount-triggered load fires.
            FetchStatus::Idle | FetchStatus::Loading => JobListView::Loading,
            FetchStatus::Failed(_) => JobListView::Failed,
            FetchStatus::Succeeded(jobs) if jobs.is_empty() => {
                JobListView::NoResults(self.no_results_message.clone())
            }
            FetchStatus::Succeeded(jobs) => JobListView::Results(jobs),
        }
    }
}
