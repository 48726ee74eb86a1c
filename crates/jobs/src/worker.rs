use batchdns_application::codec;
use batchdns_application::ports::JobQueue;
use batchdns_application::use_cases::HandleJobUseCase;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Consumes job envelopes from the transport until it closes or the
/// cancellation token fires. Malformed and rejected jobs are dropped
/// with a log line and no output; redelivery, if any, is the
/// transport's concern and the worker never retries.
pub struct ResolutionWorker {
    queue: Arc<dyn JobQueue>,
    handle_job: Arc<HandleJobUseCase>,
    shutdown: Option<CancellationToken>,
}

impl ResolutionWorker {
    pub fn new(queue: Arc<dyn JobQueue>, handle_job: Arc<HandleJobUseCase>) -> Self {
        Self {
            queue,
            handle_job,
            shutdown: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move { self.run().await })
    }

    pub async fn run(&self) {
        info!("Starting resolution worker");
        let shutdown = self.shutdown.clone().unwrap_or_default();

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Resolution worker shutting down");
                    break;
                }
                payload = self.queue.receive() => match payload {
                    Some(payload) => self.process(&payload).await,
                    None => {
                        info!("Job transport closed, stopping worker");
                        break;
                    }
                }
            }
        }
    }

    async fn process(&self, payload: &[u8]) {
        debug!(bytes = payload.len(), "received job payload");

        let job = match codec::decode_job(payload) {
            Ok(job) => job,
            Err(e) => {
                warn!(error = %e, "dropping malformed job");
                return;
            }
        };

        let job = match self.handle_job.execute(job).await {
            Ok(job) => job,
            Err(e) => {
                warn!(error = %e, "job rejected");
                return;
            }
        };

        match codec::encode_job(&job) {
            Ok(encoded) => {
                if let Err(e) = self.queue.publish(encoded).await {
                    error!(error = %e, "failed to publish job result");
                }
            }
            Err(e) => error!(error = %e, "failed to encode job result"),
        }
    }
}
