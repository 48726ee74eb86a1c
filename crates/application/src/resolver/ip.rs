use super::claim_domain;
use crate::ports::DnsLookup;
use batchdns_domain::{DomainError, Record, RecordKind};
use std::sync::Arc;

/// Leaf node: one A lookup for the assigned domain. Returns the raw
/// address list; cardinality policy belongs to the batch layer, so 0, 1
/// or many records are all valid here.
pub struct IpResolver {
    lookup: Arc<dyn DnsLookup>,
    domain: Option<Arc<str>>,
    spent: bool,
}

impl IpResolver {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self {
            lookup,
            domain: None,
            spent: false,
        }
    }

    pub fn set_value(&mut self, domain: impl Into<Arc<str>>) {
        self.domain = Some(domain.into());
    }

    pub async fn resolve(&mut self) -> Result<Vec<Record>, DomainError> {
        let domain = claim_domain(&mut self.domain, &mut self.spent)?;
        self.lookup.lookup(&domain, RecordKind::A).await
    }
}
