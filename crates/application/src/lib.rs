//! batchdns application layer: ports, the resolver chain and the
//! batch/job use cases.
pub mod codec;
pub mod ports;
pub mod resolver;
pub mod use_cases;
