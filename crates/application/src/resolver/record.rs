use super::Resolver;
use batchdns_domain::{DomainError, Record};
use std::sync::Arc;

/// Top-level dispatch node. Currently a passthrough that preserves the
/// child's result and error verbatim; the extension point for future
/// record-kind-specific dispatch without changing call sites.
pub struct RecordResolver {
    child: Box<Resolver>,
}

impl RecordResolver {
    pub fn new(child: Resolver) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn set_value(&mut self, domain: impl Into<Arc<str>>) {
        self.child.set_value(domain);
    }

    pub async fn resolve(&mut self) -> Result<Vec<Record>, DomainError> {
        self.child.resolve().await
    }
}
