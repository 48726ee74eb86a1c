use crate::resolver::ChainFactory;
use batchdns_domain::{BatchItem, BatchOutcome, DomainError, LookupMode, Record};
use futures::StreamExt;
use std::sync::Arc;
use tracing::warn;

/// Resolves an ordered domain list through fresh chain instances and
/// classifies each item. Domains are mutually independent: the batch
/// never short-circuits, and each domain is attempted exactly once.
pub struct ResolveBatchUseCase {
    factory: ChainFactory,
    concurrency: usize,
}

impl ResolveBatchUseCase {
    pub fn new(factory: ChainFactory, concurrency: usize) -> Self {
        Self {
            factory,
            concurrency: concurrency.max(1),
        }
    }

    /// Resolutions run under a bounded worker pool; results land in
    /// index-aligned slots so item order equals input order regardless
    /// of completion order.
    pub async fn execute(&self, mode: LookupMode, domains: &[String]) -> BatchOutcome {
        let mut items: Vec<BatchItem> = domains
            .iter()
            .map(|domain| BatchItem::error(Arc::from(domain.as_str())))
            .collect();

        let resolutions = domains.iter().cloned().enumerate().map(|(index, domain)| {
            let mut chain = self.factory.chain(mode);
            let domain: Arc<str> = Arc::from(domain.as_str());
            async move {
                chain.set_value(Arc::clone(&domain));
                let result = chain.resolve().await;
                (index, domain, result)
            }
        });

        let mut stream = futures::stream::iter(resolutions).buffer_unordered(self.concurrency);
        while let Some((index, domain, result)) = stream.next().await {
            items[index] = classify(domain, result);
        }

        BatchOutcome::new(items)
    }
}

/// Per-item classification: lookup failure is an Error, any cardinality
/// other than exactly one resolved value is a Warning. Both keep the
/// empty placeholder value.
fn classify(domain: Arc<str>, result: Result<Vec<Record>, DomainError>) -> BatchItem {
    match result {
        Err(error) => {
            warn!(error = %error, domain = %domain, "domain resolution failed");
            BatchItem::error(domain)
        }
        Ok(mut records) => {
            if records.len() == 1 {
                BatchItem::success(domain, records.swap_remove(0).value)
            } else {
                warn!(
                    domain = %domain,
                    records = records.len(),
                    "expected exactly one resolved value"
                );
                BatchItem::warning(domain)
            }
        }
    }
}
