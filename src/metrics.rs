use crate::engine::NormalizationResult;

/// Aggregate validity counts for a normalized batch.
#[derive(Clone, Debug, PartialEq)]
pub struct ValiditySummary {
    /// Number of results in the batch.
    pub total: usize,
    /// Results that matched an authorized manifest entry.
    pub valid: usize,
    /// Results that did not.
    pub invalid: usize,
    /// `valid / total`.
    pub valid_share: f64,
}

/// Summarize batch outcomes. Returns `None` for an empty batch.
pub fn validity_summary(results: &[NormalizationResult]) -> Option<ValiditySummary> {
    if results.is_empty() {
        return None;
    }
    let total = results.len();
    let valid = results.iter().filter(|result| result.valid).count();
    Some(ValiditySummary {
        total,
        valid,
        invalid: total - valid,
        valid_share: valid as f64 / total as f64,
    })
}
