//! Query orchestration
//!
//! The engine owns the biblio index and answers free-text queries with a
//! ranked, capped result list. Queries made of digits and dots switch to
//! clause-number mode: a literal string-prefix filter over the clause
//! subsequence, emitted in document order and never re-ranked. Note the
//! prefix test is not segment-aware, so `"8.2"` also matches a clause
//! numbered `"8.20"`; downstream consumers rely on this.

use crate::biblio::entry::BiblioEntry;
use crate::biblio::index::BiblioIndex;
use crate::config::MenuConfig;

use super::fuzzy::fuzzy_match;
use super::relevance::relevance;

/// One ranked search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<'a> {
    /// The entry's display key (empty only in clause-number mode, for a
    /// clause whose key cannot be derived).
    pub key: String,
    pub entry: &'a BiblioEntry,
    /// Fuzzy-mode score; `None` in clause-number mode, which keeps
    /// document order instead of re-ranking.
    pub relevance: Option<u32>,
}

/// Fuzzy search plus clause-number lookup over a built [`BiblioIndex`].
pub struct SearchEngine {
    index: BiblioIndex,
    config: MenuConfig,
}

impl SearchEngine {
    pub fn new(index: BiblioIndex) -> Self {
        Self::with_config(index, MenuConfig::default())
    }

    pub fn with_config(index: BiblioIndex, config: MenuConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &BiblioIndex {
        &self.index
    }

    /// Answer a query with at most `result_limit` results.
    ///
    /// The empty query and queries below `min_query_chars` yield an
    /// empty list; the former is the caller's "clear" sentinel, the
    /// latter a floor against overly broad scans.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        if query.is_empty() || query.chars().count() < self.config.min_query_chars {
            return Vec::new();
        }

        let mut results = if is_clause_number_query(query) {
            self.search_by_clause_number(query)
        } else {
            self.search_fuzzy(query)
        };

        results.truncate(self.config.result_limit);
        results
    }

    fn search_by_clause_number(&self, query: &str) -> Vec<SearchResult<'_>> {
        self.index
            .clauses()
            .filter(|clause| clause.number.as_deref().unwrap_or("").starts_with(query))
            .map(|clause| SearchResult {
                key: clause.display_key().unwrap_or_default().to_string(),
                entry: clause,
                relevance: None,
            })
            .collect()
    }

    fn search_fuzzy(&self, query: &str) -> Vec<SearchResult<'_>> {
        let mut results: Vec<SearchResult<'_>> = Vec::new();

        for entry in self.index.entries() {
            // entries without a key aren't searchable
            let Some(key) = entry.display_key() else {
                continue;
            };
            if let Some(found) = fuzzy_match(query, key) {
                results.push(SearchResult {
                    key: key.to_string(),
                    entry,
                    relevance: Some(relevance(&found, key.chars().count())),
                });
            }
        }

        // stable sort: equal scores keep their index order
        results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        results
    }
}

/// True for queries made solely of ASCII digits and `.` characters.
fn is_clause_number_query(query: &str) -> bool {
    query.chars().all(|c| c.is_ascii_digit() || c == '.')
}
