//! Manifest row, record, and lookup key types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::NormalizerError;
use crate::token::{row_token, section_token, strip_to_letters, Token};
use crate::types::{RowCode, SectionCode};

/// One already-parsed manifest row: an ordinal position plus raw text fields.
///
/// Well-formed rows carry either 2 fields `(section_id, section_name)` or
/// 4 fields `(section_id, section_name, row_id, row_name)`. Any other field
/// count aborts index construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRow {
    /// 0-based position of this row in its source, for error reporting.
    pub ordinal: u64,
    /// Raw field values in source order.
    pub fields: Vec<String>,
}

impl ManifestRow {
    /// Create a row from its source position and raw fields.
    pub fn new(ordinal: u64, fields: Vec<String>) -> Self {
        Self { ordinal, fields }
    }
}

/// One authorized manifest entry. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Internal section identifier as given by the manifest.
    pub section_code: SectionCode,
    /// Internal row identifier, absent for section-only entries.
    pub row_code: Option<RowCode>,
    /// Raw section display name.
    pub section_name: String,
    /// Uppercase-normalized row display name, absent for section-only entries.
    pub row_name: Option<String>,
    /// `section_name` with every non-letter removed, derived once at load.
    /// This is the candidate side of relevance scoring.
    pub section_letters: String,
}

impl ManifestRecord {
    /// Build a record from a raw manifest row.
    ///
    /// Fails with [`NormalizerError::MalformedRow`] on any field count other
    /// than 2 or 4; a malformed row is a load-time fatal condition, not a
    /// per-row skip.
    pub fn from_row(row: &ManifestRow) -> Result<Self, NormalizerError> {
        match row.fields.as_slice() {
            [section_code, section_name] => Ok(Self {
                section_code: section_code.clone(),
                row_code: None,
                section_name: section_name.clone(),
                row_name: None,
                section_letters: strip_to_letters(section_name),
            }),
            [section_code, section_name, row_code, row_name] => Ok(Self {
                section_code: section_code.clone(),
                row_code: Some(row_code.clone()),
                section_name: section_name.clone(),
                row_name: Some(row_name.to_uppercase()),
                section_letters: strip_to_letters(section_name),
            }),
            fields => Err(NormalizerError::MalformedRow {
                ordinal: row.ordinal,
                field_count: fields.len(),
            }),
        }
    }

    /// The key this record is indexed under.
    ///
    /// The row component is the stored row name admitted as-is, NOT validated
    /// through the row grammar; only query-side keys validate their row.
    pub fn key(&self) -> NameKey {
        let row = match &self.row_name {
            Some(name) => Token::present(name.clone()),
            None => Token::Absent,
        };
        NameKey {
            section: section_token(Some(&self.section_name)),
            row,
        }
    }
}

/// Composite lookup key of (section token, row token).
///
/// Equality re-runs the section extractor on both sides' underlying text
/// before comparing, rather than trusting stored fields. The extractor is
/// idempotent, so for keys built by this crate the re-derivation reduces to
/// structural equality; routing both sides through the same call keeps the
/// contract honest if a future manifest source stores unextracted names.
#[derive(Clone, Debug)]
pub struct NameKey {
    /// Section component.
    pub section: Token,
    /// Row component.
    pub row: Token,
}

impl NameKey {
    /// Build a query-side key from caller-supplied raw labels.
    pub fn query(section: Option<&str>, row: Option<&str>) -> Self {
        Self {
            section: section_token(section),
            row: row_token(row),
        }
    }

    fn derived_section(&self) -> Token {
        match &self.section {
            Token::Valid(text) => section_token(Some(text)),
            other => other.clone(),
        }
    }
}

impl PartialEq for NameKey {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.derived_section() == other.derived_section()
    }
}

impl Eq for NameKey {}

impl Hash for NameKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with eq: hash the re-derived section component.
        self.derived_section().hash(state);
        self.row.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> ManifestRow {
        ManifestRow::new(0, fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn section_only_row_builds_record_without_row_fields() {
        let record = ManifestRecord::from_row(&row(&["10", "100 Main"])).unwrap();
        assert_eq!(record.section_code, "10");
        assert_eq!(record.row_code, None);
        assert_eq!(record.row_name, None);
        assert_eq!(record.section_letters, "Main");
        assert_eq!(record.key().row, Token::Absent);
    }

    #[test]
    fn four_field_row_uppercases_row_name() {
        let record =
            ManifestRecord::from_row(&row(&["10", "100 Main", "3", "aa"])).unwrap();
        assert_eq!(record.row_code.as_deref(), Some("3"));
        assert_eq!(record.row_name.as_deref(), Some("AA"));
        assert_eq!(record.key().row, Token::Valid("AA".into()));
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let err = ManifestRecord::from_row(&ManifestRow::new(7, vec!["10".into()]))
            .unwrap_err();
        match err {
            NormalizerError::MalformedRow {
                ordinal,
                field_count,
            } => {
                assert_eq!(ordinal, 7);
                assert_eq!(field_count, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn manifest_key_matches_query_key_through_the_same_extractor() {
        let record =
            ManifestRecord::from_row(&row(&["10", "100 Main", "1", "a"])).unwrap();
        assert_eq!(record.key(), NameKey::query(Some("Sec 100"), Some("A")));
    }

    #[test]
    fn absent_and_invalid_components_never_collide() {
        let with_row = NameKey::query(Some("100"), Some("ABC")); // row invalid
        let without_row = NameKey::query(Some("100"), None); // row absent
        assert_ne!(with_row, without_row);

        let no_digits = NameKey::query(Some("MEZZ"), None); // section invalid
        let no_section = NameKey::query(None, None); // section absent
        assert_ne!(no_digits, no_section);
    }

    #[test]
    fn unvalidated_manifest_row_name_does_not_match_rejected_query_row() {
        // "ABC" is stored verbatim on the manifest side but fails the query
        // grammar, so the two sides land on different keys.
        let record =
            ManifestRecord::from_row(&row(&["10", "100 Main", "1", "ABC"])).unwrap();
        assert_eq!(record.key().row, Token::Valid("ABC".into()));
        assert_ne!(record.key(), NameKey::query(Some("100"), Some("ABC")));
    }
}
