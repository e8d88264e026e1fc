//! Job detail aggregation: one response body becomes one coherent view model
//! holding the full detail entity plus its similar-job siblings.

use serde_json::Value;

use crate::errors::FetchError;
use crate::models::job::{JobDetail, JobDetailEnvelope, SimilarJob};

/// The merged detail + similar-jobs view model, rebuilt whole on every
/// successful detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailView {
    pub detail: JobDetail,
    pub similar: Vec<SimilarJob>,
}

/// Decodes a raw `GET /jobs/{id}` body. All-or-nothing: a response missing a
/// required nested block (`skills`, `life_at_company`) fails with the decode
/// variant and yields no partial view model. Similar-job ordering from the
/// response is preserved.
pub fn aggregate(raw: Value) -> Result<JobDetailView, FetchError> {
    let envelope: JobDetailEnvelope = serde_json::from_value(raw)?;
    Ok(JobDetailView {
        detail: envelope.job_details,
        similar: envelope.similar_jobs,
    })
}
