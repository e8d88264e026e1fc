//! Demo binary: one search round-trip against the live board API. Loads the
//! profile and the unfiltered job list, then drills into the first posting.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_client::{
    Config, FetchStatus, JobBoardClient, JobDetailFetcher, JobListView, JobSearchSession,
    JobsFetcher, NoToken, ProfileFetcher, ResourceLoader, StaticToken, TokenProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Job board client v{}", env!("CARGO_PKG_VERSION"));
    info!("Base URL: {}", config.base_url);

    let tokens: Arc<dyn TokenProvider> = match config.token.clone() {
        Some(token) => Arc::new(StaticToken(token)),
        None => {
            warn!("JOB_BOARD_TOKEN not set; requests will go out unauthenticated");
            Arc::new(NoToken)
        }
    };

    let client = JobBoardClient::with_timeout(&config.base_url, tokens, config.http_timeout);

    let profile = ResourceLoader::new(Arc::new(ProfileFetcher(client.clone())));
    let session = JobSearchSession::new(JobsFetcher(client.clone()));

    // Profile and job list load independently, like mount on the search page.
    tokio::join!(profile.load(()), session.mount());

    match profile.status() {
        FetchStatus::Succeeded(summary) => info!("Signed in as {}", summary.name),
        FetchStatus::Failed(err) => warn!("Profile fetch failed: {err}"),
        _ => {}
    }

    let first_job_id = match session.job_list_view() {
        JobListView::Results(jobs) => {
            info!("{} jobs found", jobs.len());
            for job in jobs.iter().take(5) {
                info!("  {} — {} ({})", job.title, job.location, job.package_per_annum);
            }
            jobs.first().map(|job| job.id.clone())
        }
        JobListView::NoResults(message) => {
            info!("{message}");
            None
        }
        JobListView::Failed => {
            warn!("Job list fetch failed");
            None
        }
        JobListView::Loading => None,
    };

    if let Some(id) = first_job_id {
        let detail = ResourceLoader::new(Arc::new(JobDetailFetcher(client)));
        detail.load(id).await;

        match detail.status() {
            FetchStatus::Succeeded(view) => {
                info!(
                    "Detail: {} — {} skills, {} similar jobs",
                    view.detail.title,
                    view.detail.skills.len(),
                    view.similar.len()
                );
            }
            FetchStatus::Failed(err) => warn!("Detail fetch failed: {err}"),
            _ => {}
        }
    }

    Ok(())
}
