use batchdns_domain::{DomainError, Record, RecordKind};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Parse a response and extract the answers of the requested kind,
    /// in answer order. `expected_id` guards against a stray datagram
    /// answering a different query.
    ///
    /// NOERROR with zero matching answers is a legitimate empty result;
    /// NXDOMAIN and server failures are lookup errors.
    pub fn parse(
        response_bytes: &[u8],
        kind: RecordKind,
        expected_id: u16,
    ) -> Result<Vec<Record>, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response id {} does not match query id {}",
                message.id(),
                expected_id
            )));
        }

        match message.response_code() {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => return Err(DomainError::NxDomain),
            rcode => {
                return Err(DomainError::UpstreamFailure(Self::rcode_to_status(rcode).to_string()))
            }
        }

        let mut records = Vec::new();
        for answer in message.answers() {
            match (kind, answer.data()) {
                (RecordKind::A, RData::A(a)) => {
                    records.push(Record::new(RecordKind::A, a.0.to_string()));
                }
                (RecordKind::Cname, RData::CNAME(canonical)) => {
                    let target = canonical.to_utf8();
                    let target = target.strip_suffix('.').unwrap_or(&target);
                    records.push(Record::new(RecordKind::Cname, target));
                }
                _ => {}
            }
        }

        debug!(
            kind = %kind,
            records = records.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(records)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
