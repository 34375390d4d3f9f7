//! Raw label validation and token extraction.
//!
//! Every lookup key component passes through exactly one of these extractors,
//! both at index-build time and at query time. The index and the query side
//! must call the same function; key equality depends on it.

use serde::{Deserialize, Serialize};

use crate::types::TokenText;

/// Three-state outcome of validating one raw input field.
///
/// Distinguishes "no input at all" from "input present but rejected":
/// - `Absent` — the caller supplied no value.
/// - `Invalid` — a value was supplied but yielded no valid token.
/// - `Valid` — a non-empty canonical token.
///
/// `Absent` and `Invalid` are distinct key components: a manifest entry keyed
/// on an absent row never matches a query whose row was supplied but rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// No input was supplied.
    Absent,
    /// Input was supplied but did not validate to a token.
    Invalid,
    /// Canonical non-empty token text.
    Valid(TokenText),
}

impl Token {
    /// Admit an already-present raw value as a token without validation.
    ///
    /// Used for the manifest-side row component, which stores the uppercased
    /// row name as given rather than running it through [`row_token`].
    pub fn present(text: impl Into<TokenText>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Token::Invalid
        } else {
            Token::Valid(text)
        }
    }

    /// Whether this token is `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Token::Valid(_))
    }

    /// Whether this token is `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Token::Absent)
    }

    /// The canonical text when `Valid`, otherwise `None`.
    pub fn as_valid(&self) -> Option<&str> {
        match self {
            Token::Valid(text) => Some(text),
            _ => None,
        }
    }
}

/// Extract the canonical section token from a raw section label.
///
/// Scans left to right for the first maximal run of ASCII decimal digits.
/// Idempotent: extracting from an already-extracted token returns the same
/// token.
pub fn section_token(raw: Option<&str>) -> Token {
    let Some(raw) = raw else {
        return Token::Absent;
    };
    let mut run = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if !run.is_empty() {
            break;
        }
    }
    if run.is_empty() {
        Token::Invalid
    } else {
        Token::Valid(run)
    }
}

/// Extract the canonical row token from a raw row label.
///
/// The whole string must be one of: a single digit 1-9, a two-digit number
/// 10-99, one ASCII letter, or two ASCII letters. Letters are uppercased.
pub fn row_token(raw: Option<&str>) -> Token {
    let Some(raw) = raw else {
        return Token::Absent;
    };
    let chars: Vec<char> = raw.chars().collect();
    let accepted = match chars.as_slice() {
        [d] => ('1'..='9').contains(d) || d.is_ascii_alphabetic(),
        [a, b] => {
            (('1'..='9').contains(a) && b.is_ascii_digit())
                || (a.is_ascii_alphabetic() && b.is_ascii_alphabetic())
        }
        _ => false,
    };
    if accepted {
        Token::Valid(raw.to_ascii_uppercase())
    } else {
        Token::Invalid
    }
}

/// Remove every character that is not an ASCII letter, preserving case and
/// order. Used only to prepare strings for frequency scoring, never for key
/// derivation.
pub fn strip_to_letters(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphabetic).collect()
}
