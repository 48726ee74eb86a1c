use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use batchdns_application::ports::DnsLookup;
use batchdns_domain::{DomainError, Record, RecordKind};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// UDP lookup adapter behind the `DnsLookup` port. Every call binds its
/// own ephemeral socket, so concurrent batch slots share no transport
/// state; the receive wait is bounded so one unresponsive lookup cannot
/// stall the batch.
pub struct UdpLookupClient {
    server: SocketAddr,
    timeout: Duration,
}

impl UdpLookupClient {
    pub fn new(server: &str, timeout_ms: u64) -> Result<Self, DomainError> {
        let server = server.parse().map_err(|e| {
            DomainError::Io(format!("Invalid upstream server address '{}': {}", server, e))
        })?;

        Ok(Self {
            server,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[async_trait]
impl DnsLookup for UdpLookupClient {
    async fn lookup(&self, domain: &str, kind: RecordKind) -> Result<Vec<Record>, DomainError> {
        let (id, request) = MessageBuilder::build_query(domain, kind)?;

        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DomainError::Io(format!("Failed to bind socket: {}", e)))?;

        socket
            .connect(self.server)
            .await
            .map_err(|e| DomainError::Io(format!("Failed to connect to server: {}", e)))?;

        socket
            .send(&request)
            .await
            .map_err(|e| DomainError::Io(format!("Failed to send query: {}", e)))?;

        let mut response_buf = vec![0u8; 4096];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut response_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::Io(format!("Failed to receive response: {}", e)))?;

        let records = ResponseParser::parse(&response_buf[..len], kind, id)?;
        debug!(domain = %domain, kind = %kind, records = records.len(), "lookup completed");
        Ok(records)
    }
}
