use async_trait::async_trait;
use batchdns_domain::{DomainError, Record, RecordKind};

/// Injected single-level lookup capability. One call performs one query
/// for one record kind; zero records with no error is a legitimate
/// outcome. Implementations must be safe for concurrent invocation.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup(&self, domain: &str, kind: RecordKind) -> Result<Vec<Record>, DomainError>;
}
