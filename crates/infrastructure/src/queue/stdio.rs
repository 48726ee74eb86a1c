use async_trait::async_trait;
use batchdns_application::ports::JobQueue;
use batchdns_domain::DomainError;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use tokio::sync::Mutex;
use tracing::warn;

/// Line-oriented transport over stdin/stdout: one JSON envelope per line
/// in, one result envelope per line out. EOF closes the queue.
pub struct StdioJobQueue {
    lines: Mutex<Lines<BufReader<Stdin>>>,
    stdout: Mutex<Stdout>,
}

impl StdioJobQueue {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdioJobQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobQueue for StdioJobQueue {
    async fn receive(&self) -> Option<Vec<u8>> {
        let mut lines = self.lines.lock().await;
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(line.into_bytes());
                }
                Ok(None) => return None,
                Err(e) => {
                    warn!(error = %e, "failed to read job line");
                    return None;
                }
            }
        }
    }

    async fn publish(&self, payload: Vec<u8>) -> Result<(), DomainError> {
        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(&payload)
            .await
            .map_err(|e| DomainError::Io(e.to_string()))?;
        stdout
            .write_all(b"\n")
            .await
            .map_err(|e| DomainError::Io(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| DomainError::Io(e.to_string()))?;
        Ok(())
    }
}
