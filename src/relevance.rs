//! Relevance scoring used to disambiguate colliding manifest entries.
//!
//! When several manifest records share one lookup key, the raw vendor section
//! string picks among them: each candidate's letter signature is scored by
//! the letters whose case-folded occurrence counts match the supplied
//! string's exactly, and the best-scoring candidate wins.

use std::collections::HashMap;

use crate::manifest::ManifestRecord;
use crate::token::strip_to_letters;

/// Count occurrences of each letter in `s`, case-folded to lowercase.
pub fn letter_frequencies(s: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in s.chars() {
        *counts.entry(ch.to_ascii_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Pick the most relevant candidate for a raw vendor section string.
///
/// A lone candidate is returned unconditionally, with no scoring and no
/// threshold check. Otherwise each candidate's `section_letters` frequency
/// entries are walked with a running count; a letter contributes its count
/// only when both sides hold exactly equal counts for it. The running count
/// is compared against the best score after every entry, not once per
/// candidate, and a tie never displaces an earlier best. Both behaviors are
/// kept for compatibility with the deployed matcher.
///
/// After scoring, a best match is rejected when more than `leftover_limit`
/// supplied letters remain unaccounted for; a string mostly unexplained by
/// its best candidate is not trusted.
pub fn most_relevant<'a>(
    candidates: &'a [ManifestRecord],
    raw_section: &str,
    leftover_limit: usize,
) -> Option<&'a ManifestRecord> {
    if let [only] = candidates {
        return Some(only);
    }

    let supplied = strip_to_letters(raw_section);
    let supplied_freq = letter_frequencies(&supplied);

    let mut best: Option<&ManifestRecord> = None;
    let mut best_score = 0usize;

    for candidate in candidates {
        let mut count = 0usize;
        for (letter, occurrences) in letter_frequencies(&candidate.section_letters) {
            if supplied_freq.get(&letter) == Some(&occurrences) {
                count += occurrences;
            }
            // Running comparison after every entry.
            if count > best_score {
                best_score = count;
                best = Some(candidate);
            }
        }
    }

    if supplied.len().saturating_sub(best_score) > leftover_limit {
        return None;
    }
    best
}
