use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Upstream server failure: {0}")]
    UpstreamFailure(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Resolver state error: {0}")]
    InvalidState(&'static str),

    #[error("Malformed job envelope: {0}")]
    MalformedJob(String),

    #[error("Envelope encode error: {0}")]
    Codec(String),

    #[error("Unsupported job type {0}")]
    UnsupportedJobType(u32),

    #[error("Unsupported lookup mode: {0}")]
    UnsupportedMode(String),
}
