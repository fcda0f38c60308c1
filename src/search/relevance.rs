//! Deterministic relevance scoring
//!
//! Packs the match metadata into one integer so results order with a
//! plain descending sort:
//! - bit 12: set for prefix matches
//! - bits 8-11: 8 minus the chunk count, doubled when the case matched
//! - bits 1-7: 127 minus the key length
//!
//! Fewer chunks beat more chunks, case-sensitive beats folded, prefix
//! beats interior, and shorter keys win the remaining ties.

use super::fuzzy::FuzzyMatch;

/// Score a match against a key of `key_len` characters.
pub fn relevance(found: &FuzzyMatch, key_len: usize) -> u32 {
    let mut relevance = (8u32.saturating_sub(found.chunks)) << 7;

    if found.case_match {
        relevance *= 2;
    }

    if found.prefix {
        relevance += 2048;
    }

    relevance + 255usize.saturating_sub(key_len) as u32
}
