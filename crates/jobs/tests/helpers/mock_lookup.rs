#![allow(dead_code)]

use async_trait::async_trait;
use batchdns_application::ports::DnsLookup;
use batchdns_domain::{DomainError, Record, RecordKind};
use std::collections::HashMap;
use std::sync::RwLock;

/// Deterministic lookup double keyed by (domain, kind). Unconfigured
/// lookups resolve to zero records.
pub struct MockDnsLookup {
    responses: RwLock<HashMap<(String, RecordKind), Vec<Record>>>,
    errors: RwLock<HashMap<(String, RecordKind), DomainError>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_records(&self, domain: &str, kind: RecordKind, values: &[&str]) {
        let records = values
            .iter()
            .map(|value| Record::new(kind, *value))
            .collect();
        self.responses
            .write()
            .unwrap()
            .insert((domain.to_string(), kind), records);
    }

    pub fn set_error(&self, domain: &str, kind: RecordKind, error: DomainError) {
        self.errors
            .write()
            .unwrap()
            .insert((domain.to_string(), kind), error);
    }
}

impl Default for MockDnsLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn lookup(&self, domain: &str, kind: RecordKind) -> Result<Vec<Record>, DomainError> {
        let key = (domain.to_string(), kind);
        if let Some(error) = self.errors.read().unwrap().get(&key).cloned() {
            return Err(error);
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
