use std::sync::Arc;

/// Terminal state of one domain's resolution within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    Success,
    Warning,
    Error,
}

/// Per-domain result slot. `value` is the single resolved value on
/// success and the empty placeholder otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub domain: Arc<str>,
    pub value: String,
    pub outcome: ItemOutcome,
}

impl BatchItem {
    pub fn success(domain: Arc<str>, value: impl Into<String>) -> Self {
        Self {
            domain,
            value: value.into(),
            outcome: ItemOutcome::Success,
        }
    }

    pub fn warning(domain: Arc<str>) -> Self {
        Self {
            domain,
            value: String::new(),
            outcome: ItemOutcome::Warning,
        }
    }

    pub fn error(domain: Arc<str>) -> Self {
        Self {
            domain,
            value: String::new(),
            outcome: ItemOutcome::Error,
        }
    }
}

/// Aggregate batch status. Error dominates Warning dominates Ok.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Ok,
    Warning,
    Error,
}

impl BatchStatus {
    /// Pure reduction over item outcomes. Order-independent; an empty
    /// batch is a vacuous success.
    pub fn aggregate<'a>(outcomes: impl IntoIterator<Item = &'a ItemOutcome>) -> Self {
        let mut status = BatchStatus::Ok;
        for outcome in outcomes {
            match outcome {
                ItemOutcome::Error => return BatchStatus::Error,
                ItemOutcome::Warning => status = BatchStatus::Warning,
                ItemOutcome::Success => {}
            }
        }
        status
    }

    /// User-visible completion message for the activity output.
    pub fn message(&self) -> &'static str {
        match self {
            BatchStatus::Ok => "completed",
            BatchStatus::Warning => "completed with warning",
            BatchStatus::Error => "completed with errors",
        }
    }
}

/// Result of resolving one ordered domain list. Items are index-aligned
/// with the input; status is a pure function of the item outcomes.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub items: Vec<BatchItem>,
    pub status: BatchStatus,
}

impl BatchOutcome {
    pub fn new(items: Vec<BatchItem>) -> Self {
        let status = BatchStatus::aggregate(items.iter().map(|item| &item.outcome));
        Self { items, status }
    }
}
