use super::{CnameResolver, IpResolver, RecordResolver, Resolver};
use crate::ports::DnsLookup;
use batchdns_domain::LookupMode;
use std::sync::Arc;

/// Value-based chain blueprint. Each node owns at most one child box, so
/// the graph is linear and acyclic by construction; instantiating a spec
/// yields a fresh single-use node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainSpec {
    Ip,
    Cname { child: Option<Box<ChainSpec>> },
    Record { child: Box<ChainSpec> },
}

impl ChainSpec {
    /// Chain topology for a lookup mode: "A" is a terminal address
    /// chain, "CNAME" resolves aliases down to addresses.
    pub fn for_mode(mode: LookupMode) -> Self {
        match mode {
            LookupMode::A => ChainSpec::Ip,
            LookupMode::Cname => ChainSpec::Record {
                child: Box::new(ChainSpec::Cname {
                    child: Some(Box::new(ChainSpec::Ip)),
                }),
            },
        }
    }

    pub fn instantiate(&self, lookup: Arc<dyn DnsLookup>) -> Resolver {
        match self {
            ChainSpec::Ip => Resolver::Ip(IpResolver::new(lookup)),
            ChainSpec::Cname { child } => {
                Resolver::Cname(CnameResolver::new(lookup, child.as_deref().cloned()))
            }
            ChainSpec::Record { child } => {
                let inner = child.instantiate(lookup);
                Resolver::Record(RecordResolver::new(inner))
            }
        }
    }
}

/// Produces a fresh chain instance per call; resolver nodes are
/// single-use, so every resolution gets its own tree.
pub struct ChainFactory {
    lookup: Arc<dyn DnsLookup>,
}

impl ChainFactory {
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    pub fn chain(&self, mode: LookupMode) -> Resolver {
        ChainSpec::for_mode(mode).instantiate(Arc::clone(&self.lookup))
    }
}
