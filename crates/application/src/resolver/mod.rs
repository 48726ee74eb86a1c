//! Chained resolver nodes. A chain is a strictly linear graph of
//! single-use nodes: delegating nodes own at most one child blueprint and
//! build a fresh child instance per resolved target.
pub mod chain;
pub mod cname;
pub mod ip;
pub mod record;

pub use chain::{ChainFactory, ChainSpec};
pub use cname::CnameResolver;
pub use ip::IpResolver;
pub use record::RecordResolver;

use batchdns_domain::{DomainError, Record};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

/// One resolver node. Nodes are single-use: `set_value` must be called
/// exactly once before `resolve`, and a node cannot be resolved twice.
pub enum Resolver {
    Ip(IpResolver),
    Cname(CnameResolver),
    Record(RecordResolver),
}

impl Resolver {
    /// Assign the subject domain for this node's single resolution.
    pub fn set_value(&mut self, domain: impl Into<Arc<str>>) {
        match self {
            Resolver::Ip(node) => node.set_value(domain),
            Resolver::Cname(node) => node.set_value(domain),
            Resolver::Record(node) => node.set_value(domain),
        }
    }

    /// Perform this node's lookup, delegating to children where
    /// configured. Boxed so delegating nodes can recurse through the
    /// enum without an infinitely-sized future.
    pub fn resolve(&mut self) -> BoxFuture<'_, Result<Vec<Record>, DomainError>> {
        match self {
            Resolver::Ip(node) => node.resolve().boxed(),
            Resolver::Cname(node) => node.resolve().boxed(),
            Resolver::Record(node) => node.resolve().boxed(),
        }
    }
}

/// Shared single-use guard: consumes the assigned domain, failing loudly
/// on reuse or on a missing `set_value`. Either case is a
/// chain-construction bug, not a lookup failure.
pub(crate) fn claim_domain(
    domain: &mut Option<Arc<str>>,
    spent: &mut bool,
) -> Result<Arc<str>, DomainError> {
    if *spent {
        return Err(DomainError::InvalidState(
            "resolver node is single-use and was already resolved",
        ));
    }
    *spent = true;
    domain
        .take()
        .ok_or(DomainError::InvalidState("resolve called before set_value"))
}
