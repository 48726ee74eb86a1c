use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Resolution mode selector: decides which resolver chain topology the
/// factory builds for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    A,
    Cname,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::A => "A",
            LookupMode::Cname => "CNAME",
        }
    }

    /// Activity id recorded on the job output for this mode.
    pub fn activity_id(&self) -> &'static str {
        match self {
            LookupMode::A => "lookup-a",
            LookupMode::Cname => "lookup-cname",
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(LookupMode::A),
            "CNAME" => Ok(LookupMode::Cname),
            _ => Err(DomainError::UnsupportedMode(s.to_string())),
        }
    }
}
