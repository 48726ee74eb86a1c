use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream server receiving single-level queries, `host:port`.
    #[serde(default = "default_upstream_server")]
    pub upstream_server: String,

    /// Per-lookup timeout in milliseconds. Bounds how long one
    /// unresponsive lookup can hold a batch slot.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Resolution mode selector ("A" or "CNAME"). Kept as a raw string:
    /// an unrecognized mode is a job-level condition raised at dispatch,
    /// not a config-load failure.
    #[serde(default = "default_lookup_mode")]
    pub lookup_mode: String,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_server: default_upstream_server(),
            timeout_ms: default_timeout_ms(),
            lookup_mode: default_lookup_mode(),
        }
    }
}

fn default_upstream_server() -> String {
    "1.1.1.1:53".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_lookup_mode() -> String {
    "A".to_string()
}
