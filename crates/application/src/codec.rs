//! Envelope codec. Payloads cross the job transport as opaque bytes;
//! this is the only place they are interpreted.

use batchdns_domain::{DomainError, Job};

/// Decode an inbound payload. Undecodable payloads are malformed input:
/// the caller drops the whole message without producing output.
pub fn decode_job(payload: &[u8]) -> Result<Job, DomainError> {
    serde_json::from_slice(payload).map_err(|e| DomainError::MalformedJob(e.to_string()))
}

/// Encode a processed envelope for publication.
pub fn encode_job(job: &Job) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec(job).map_err(|e| DomainError::Codec(e.to_string()))
}
