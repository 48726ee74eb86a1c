use serde::{Deserialize, Serialize};

/// The single job type this worker handles: chained DNS resolution over
/// the envelope's domain list.
pub const JOB_TYPE_DNS_RESOLUTION: u32 = 0;

/// Job envelope as carried on the transport. Decoded from and encoded to
/// JSON by the envelope codec; the worker only reads `data.type` and
/// `data.input.domains` and appends to `data.outputs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub data: JobData,

    #[serde(default)]
    pub last_activity_id: Option<String>,

    #[serde(default)]
    pub last_activity_message: Option<String>,

    #[serde(default)]
    pub last_activity_is_ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobData {
    #[serde(rename = "type")]
    pub job_type: u32,

    pub input: JobInput,

    #[serde(default)]
    pub outputs: Vec<ActivityOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(default)]
    pub domains: Vec<String>,
}

/// One activity's contribution to the job's output history.
/// `data` holds the JSON-encoded ordered list of resolved values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOutput {
    pub index: u32,
    pub id: String,
    pub data: String,
    pub is_ok: bool,
    pub message: String,
}
