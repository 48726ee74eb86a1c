pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod worker;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use worker::WorkerConfig;
