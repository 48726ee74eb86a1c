use super::chain::ChainSpec;
use super::claim_domain;
use crate::ports::DnsLookup;
use batchdns_domain::{DomainError, Record, RecordKind};
use std::sync::Arc;
use tracing::warn;

/// Delegating node: looks up the CNAME target(s) for the assigned
/// domain. With no child configured the CNAME records themselves are the
/// result (terminal use). With a child blueprint, each target gets a
/// fresh child instance (nodes are single-use) and the child results are
/// concatenated in target order.
///
/// A failed target does not stop the remaining targets, but the node
/// collapses any failure into a single error: at the batch layer the
/// unit of success is the domain, not the alias.
pub struct CnameResolver {
    lookup: Arc<dyn DnsLookup>,
    child: Option<ChainSpec>,
    domain: Option<Arc<str>>,
    spent: bool,
}

impl CnameResolver {
    pub fn new(lookup: Arc<dyn DnsLookup>, child: Option<ChainSpec>) -> Self {
        Self {
            lookup,
            child,
            domain: None,
            spent: false,
        }
    }

    pub fn set_value(&mut self, domain: impl Into<Arc<str>>) {
        self.domain = Some(domain.into());
    }

    pub async fn resolve(&mut self) -> Result<Vec<Record>, DomainError> {
        let domain = claim_domain(&mut self.domain, &mut self.spent)?;
        let targets = self.lookup.lookup(&domain, RecordKind::Cname).await?;

        let Some(child_spec) = &self.child else {
            return Ok(targets);
        };

        let mut records = Vec::new();
        let mut failure: Option<DomainError> = None;
        for target in &targets {
            let mut child = child_spec.instantiate(Arc::clone(&self.lookup));
            child.set_value(target.value.as_str());
            match child.resolve().await {
                Ok(child_records) => records.extend(child_records),
                Err(error) => {
                    warn!(error = %error, target = %target.value, "alias target resolution failed");
                    failure.get_or_insert(error);
                }
            }
        }

        match failure {
            Some(error) => Err(error),
            None => Ok(records),
        }
    }
}
