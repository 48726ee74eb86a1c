use batchdns_domain::{ActivityOutput, BatchOutcome, BatchStatus, DomainError, LookupMode};

/// Map a batch outcome onto the activity record appended to the job's
/// output history. `index` is the number of outputs already on the
/// envelope; `data` is the JSON-encoded ordered value list with empty
/// placeholders for failed or ambiguous items.
pub fn activity_output(
    outcome: &BatchOutcome,
    mode: LookupMode,
    index: u32,
) -> Result<ActivityOutput, DomainError> {
    let values: Vec<&str> = outcome
        .items
        .iter()
        .map(|item| item.value.as_str())
        .collect();
    let data = serde_json::to_string(&values).map_err(|e| DomainError::Codec(e.to_string()))?;

    Ok(ActivityOutput {
        index,
        id: mode.activity_id().to_string(),
        data,
        is_ok: outcome.status != BatchStatus::Error,
        message: outcome.status.message().to_string(),
    })
}
