//! Normalization engine and its query/result types.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::relevance::LEFTOVER_LIMIT;
use crate::index::ManifestIndex;
use crate::manifest::NameKey;
use crate::relevance::most_relevant;
use crate::types::RawLabel;

/// One batch input pair of raw vendor labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationQuery {
    /// Raw section label, absent when the vendor supplied none.
    pub section: Option<RawLabel>,
    /// Raw row label, absent when the vendor supplied none.
    pub row: Option<RawLabel>,
}

impl NormalizationQuery {
    /// Create a query from optional raw labels.
    pub fn new(section: Option<&str>, row: Option<&str>) -> Self {
        Self {
            section: section.map(str::to_string),
            row: row.map(str::to_string),
        }
    }
}

/// Outcome of normalizing one input pair.
///
/// `None` is the unset sentinel for both ids, distinguishable from a
/// legitimate id of 0. Invalid results always carry unset ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// Canonical section identifier, unset on failure or for non-numeric
    /// manifest codes.
    pub section_id: Option<i64>,
    /// Canonical row identifier, unset on failure or for section-only
    /// entries.
    pub row_id: Option<i64>,
    /// Whether the input pair matched an authorized manifest entry.
    pub valid: bool,
}

impl NormalizationResult {
    /// The failure result: not valid, both ids unset.
    pub fn invalid() -> Self {
        Self {
            section_id: None,
            row_id: None,
            valid: false,
        }
    }
}

/// Turns raw vendor (section, row) pairs into canonical identifier results.
///
/// Owns a built [`ManifestIndex`] and never mutates it; one engine can serve
/// any number of queries, from any number of threads.
pub struct Normalizer {
    index: ManifestIndex,
    leftover_limit: usize,
}

impl Normalizer {
    /// Create an engine over a built index with the default leftover limit.
    pub fn new(index: ManifestIndex) -> Self {
        Self {
            index,
            leftover_limit: LEFTOVER_LIMIT,
        }
    }

    /// Override the relevance leftover rejection limit.
    pub fn with_leftover_limit(mut self, leftover_limit: usize) -> Self {
        self.leftover_limit = leftover_limit;
        self
    }

    /// The index this engine serves.
    pub fn index(&self) -> &ManifestIndex {
        &self.index
    }

    /// Normalize one (section, row) input pair.
    pub fn normalize(&self, section: Option<&str>, row: Option<&str>) -> NormalizationResult {
        let key = NameKey::query(section, row);
        let Some(candidates) = self.index.candidates(&key) else {
            return NormalizationResult::invalid();
        };

        // Relevance scoring sees the original raw section string, never the
        // extracted token.
        let raw_section = section.unwrap_or("");
        match most_relevant(candidates, raw_section, self.leftover_limit) {
            Some(record) => NormalizationResult {
                section_id: record.section_code.parse().ok(),
                row_id: record
                    .row_code
                    .as_deref()
                    .and_then(|code| code.parse().ok()),
                valid: true,
            },
            None => NormalizationResult::invalid(),
        }
    }

    /// Normalize one query value.
    pub fn normalize_query(&self, query: &NormalizationQuery) -> NormalizationResult {
        self.normalize(query.section.as_deref(), query.row.as_deref())
    }

    /// Normalize a batch of independent queries, results positionally
    /// matched to inputs.
    pub fn normalize_batch(&self, queries: &[NormalizationQuery]) -> Vec<NormalizationResult> {
        queries
            .iter()
            .map(|query| self.normalize_query(query))
            .collect()
    }

    /// Parallel variant of [`Normalizer::normalize_batch`]. Queries only read
    /// the immutable index, so the batch splits freely across threads.
    pub fn normalize_batch_parallel(
        &self,
        queries: &[NormalizationQuery],
    ) -> Vec<NormalizationResult> {
        queries
            .par_iter()
            .map(|query| self.normalize_query(query))
            .collect()
    }
}
