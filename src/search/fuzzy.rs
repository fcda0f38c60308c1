//! Fuzzy substring matching
//!
//! Decides whether a query occurs in order inside a candidate and
//! reports how tidy the occurrence was: how many contiguous runs
//! (chunks) it took, whether the match needed case folding, and whether
//! it sits within the candidate's leading characters.
//!
//! Matching is two explicit passes: a case-sensitive scan first, then
//! exactly one retry over the case-folded strings. The fold can in
//! principle change character counts, so the retry re-runs the length
//! shortcuts on the folded strings.

/// Metadata for a successful fuzzy match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// The match succeeded without falling back to case folding.
    pub case_match: bool,
    /// Contiguous runs of the query consumed from the candidate; 1 is a
    /// perfect contiguous substring, higher means gaps were skipped.
    pub chunks: u32,
    /// The whole query was consumed within the candidate's leading
    /// `query.len()` characters. A position test, not a starts-with test.
    pub prefix: bool,
}

/// Match `query` against `candidate`, or `None` when the query does not
/// fuzzily occur in it.
pub fn fuzzy_match(query: &str, candidate: &str) -> Option<FuzzyMatch> {
    let q: Vec<char> = query.chars().collect();
    let c: Vec<char> = candidate.chars().collect();

    if let Some(found) = match_pass(&q, &c, true) {
        return Some(found);
    }

    let q_folded: Vec<char> = q.iter().flat_map(|ch| ch.to_lowercase()).collect();
    let c_folded: Vec<char> = c.iter().flat_map(|ch| ch.to_lowercase()).collect();
    match_pass(&q_folded, &c_folded, false)
}

fn match_pass(query: &[char], candidate: &[char], case_sensitive: bool) -> Option<FuzzyMatch> {
    if query.len() > candidate.len() {
        return None;
    }

    // Equal lengths only ever match whole, so skip the scan entirely.
    if query.len() == candidate.len() {
        return (query == candidate).then_some(FuzzyMatch {
            case_match: case_sensitive,
            chunks: 1,
            prefix: true,
        });
    }

    let (chunks, end) = scan(query, candidate)?;
    Some(FuzzyMatch {
        case_match: case_sensitive,
        chunks,
        prefix: end <= query.len(),
    })
}

/// Cursor scan: consume each query character in order from the
/// candidate. Returns the chunk count and the cursor position after the
/// final consumed character.
fn scan(query: &[char], candidate: &[char]) -> Option<(u32, usize)> {
    let mut chunks = 1u32;
    let mut in_run = false;
    let mut cursor = 0usize;

    'query: for &qc in query {
        while cursor < candidate.len() {
            let current = candidate[cursor];
            cursor += 1;
            if current == qc {
                in_run = true;
                continue 'query;
            }
            // a matching run just ended on a skipped character
            if in_run {
                chunks += 1;
                in_run = false;
            }
        }
        return None;
    }

    Some((chunks, cursor))
}
