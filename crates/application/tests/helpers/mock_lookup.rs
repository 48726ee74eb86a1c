#![allow(dead_code)]

use async_trait::async_trait;
use batchdns_application::ports::DnsLookup;
use batchdns_domain::{DomainError, Record, RecordKind};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

/// Deterministic lookup double keyed by (domain, kind). Unconfigured
/// lookups legitimately resolve to zero records; errors are returned for
/// domains registered with `set_error`. Every call is recorded.
pub struct MockDnsLookup {
    responses: RwLock<HashMap<(String, RecordKind), Vec<Record>>>,
    errors: RwLock<HashMap<(String, RecordKind), DomainError>>,
    calls: Mutex<Vec<(String, RecordKind)>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            errors: RwLock::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
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

    pub fn calls(&self) -> Vec<(String, RecordKind)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
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
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), kind));

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
