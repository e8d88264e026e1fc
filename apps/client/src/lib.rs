//! Client-side core for a job-board search UI: per-resource fetch lifecycles
//! (profile, job list, job detail + similar jobs), composition of
//! search/filter criteria into one outbound query, and deterministic
//! re-fetch triggering when criteria change. Presentation and routing live
//! elsewhere; this crate hands them decoded payloads and one rendering
//! branch per fetch state.

pub mod api_client;
pub mod auth;
pub mod config;
pub mod detail;
pub mod errors;
pub mod filters;
pub mod loader;
pub mod models;
pub mod query;
pub mod session;

pub use api_client::{JobBoardClient, JobDetailFetcher, JobsFetcher, ProfileFetcher};
pub use auth::{EnvToken, NoToken, StaticToken, TokenProvider};
pub use config::Config;
pub use detail::{aggregate, JobDetailView};
pub use errors::FetchError;
pub use filters::{FilterState, QuerySubscriber};
pub use loader::{FetchStatus, ResourceFetcher, ResourceLoader};
pub use query::{build_jobs_query, EmploymentType, FilterCriteria, QueryDescriptor};
pub use session::{JobListView, JobSearchSession};
