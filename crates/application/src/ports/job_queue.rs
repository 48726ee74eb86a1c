use async_trait::async_trait;
use batchdns_domain::DomainError;

/// Job transport boundary. Payloads are opaque envelope bytes; decoding
/// and acknowledgment semantics live behind this port.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Next inbound payload, or `None` once the transport is closed.
    async fn receive(&self) -> Option<Vec<u8>>;

    /// Publish a result payload.
    async fn publish(&self, payload: Vec<u8>) -> Result<(), DomainError>;
}
