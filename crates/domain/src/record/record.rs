use super::RecordKind;

/// One resolved name-to-value pair. The value is an IP literal for A
/// records and a target domain name for CNAME records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: RecordKind,
    pub value: String,
}

impl Record {
    pub fn new(kind: RecordKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
