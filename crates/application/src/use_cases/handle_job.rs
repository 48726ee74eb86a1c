use super::activity::activity_output;
use super::resolve_batch::ResolveBatchUseCase;
use batchdns_domain::{DomainError, Job, LookupMode, JOB_TYPE_DNS_RESOLUTION};
use std::sync::Arc;
use tracing::info;

/// Envelope-level orchestration: validates the job, runs the batch and
/// appends the activity output. Job-level rejections (unsupported type
/// or mode) abort before any resolution and produce no output.
pub struct HandleJobUseCase {
    resolve_batch: Arc<ResolveBatchUseCase>,
    lookup_mode: String,
}

impl HandleJobUseCase {
    pub fn new(resolve_batch: Arc<ResolveBatchUseCase>, lookup_mode: impl Into<String>) -> Self {
        Self {
            resolve_batch,
            lookup_mode: lookup_mode.into(),
        }
    }

    pub async fn execute(&self, mut job: Job) -> Result<Job, DomainError> {
        if job.data.job_type != JOB_TYPE_DNS_RESOLUTION {
            return Err(DomainError::UnsupportedJobType(job.data.job_type));
        }

        // The mode selector is decided here, once per job, before any
        // resolution begins.
        let mode: LookupMode = self.lookup_mode.parse()?;

        let outcome = self
            .resolve_batch
            .execute(mode, &job.data.input.domains)
            .await;

        let output = activity_output(&outcome, mode, job.data.outputs.len() as u32)?;
        job.last_activity_id = Some(output.id.clone());
        job.last_activity_message = Some(output.message.clone());
        job.last_activity_is_ok = output.is_ok;
        job.data.outputs.push(output);

        info!(
            activity = mode.activity_id(),
            domains = job.data.input.domains.len(),
            status = ?outcome.status,
            "batch resolution completed"
        );

        Ok(job)
    }
}
