use batchdns_application::resolver::ChainFactory;
use batchdns_application::use_cases::{HandleJobUseCase, ResolveBatchUseCase};
use batchdns_domain::Config;
use batchdns_infrastructure::dns::UdpLookupClient;
use batchdns_infrastructure::queue::StdioJobQueue;
use batchdns_jobs::ResolutionWorker;
use std::sync::Arc;

/// Wire the lookup client, resolver factory and use cases into a worker
/// consuming the stdio transport.
pub fn build_worker(config: &Config) -> anyhow::Result<ResolutionWorker> {
    let lookup = Arc::new(UdpLookupClient::new(
        &config.dns.upstream_server,
        config.dns.timeout_ms,
    )?);

    let factory = ChainFactory::new(lookup);
    let batch = Arc::new(ResolveBatchUseCase::new(
        factory,
        config.worker.concurrency,
    ));
    let handle_job = Arc::new(HandleJobUseCase::new(
        batch,
        config.dns.lookup_mode.clone(),
    ));
    let queue = Arc::new(StdioJobQueue::new());

    Ok(ResolutionWorker::new(queue, handle_job))
}
