use async_trait::async_trait;
use batchdns_application::ports::JobQueue;
use batchdns_domain::DomainError;
use tokio::sync::{mpsc, Mutex};

/// In-process transport: a bounded inbox/outbox channel pair. Used by
/// tests and by embedders feeding jobs from the same process.
pub struct MemoryJobQueue {
    inbox: Mutex<mpsc::Receiver<Vec<u8>>>,
    outbox: mpsc::Sender<Vec<u8>>,
}

impl MemoryJobQueue {
    /// Build a queue plus the far side's handles: a sender feeding the
    /// inbox and a receiver draining published results. Dropping the
    /// sender closes the queue.
    pub fn channel(capacity: usize) -> (Self, mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>) {
        let (inbox_tx, inbox_rx) = mpsc::channel(capacity);
        let (outbox_tx, outbox_rx) = mpsc::channel(capacity);

        (
            Self {
                inbox: Mutex::new(inbox_rx),
                outbox: outbox_tx,
            },
            inbox_tx,
            outbox_rx,
        )
    }
}

#[async_trait]
impl JobQueue for MemoryJobQueue {
    async fn receive(&self) -> Option<Vec<u8>> {
        self.inbox.lock().await.recv().await
    }

    async fn publish(&self, payload: Vec<u8>) -> Result<(), DomainError> {
        self.outbox
            .send(payload)
            .await
            .map_err(|_| DomainError::Io("result channel closed".to_string()))
    }
}
