//! Queryable index over the flat biblio
//!
//! `BiblioIndex::build` ingests the entry list once and derives the
//! lookup structures everything else runs against: the by-id map, the
//! clause subsequence, and the reverse map from a cross-reference id to
//! the clause that contains it. The index is read-only after build.

use std::collections::HashMap;

use serde::Serialize;

use super::clause_number::compare_clause_numbers;
use super::entry::{BiblioEntry, EntryKind};

/// Biblio lookup errors. These are logic errors in the biblio asset,
/// not recoverable data-quality conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiblioError {
    UnknownEntry { id: String },
    MissingRefParent { ref_id: String },
    MissingClause { clause_id: String },
}

impl std::fmt::Display for BiblioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BiblioError::UnknownEntry { id } => write!(f, "no biblio entry with id '{}'", id),
            BiblioError::MissingRefParent { ref_id } => {
                write!(f, "no clause owns reference id '{}'", ref_id)
            }
            BiblioError::MissingClause { clause_id } => {
                write!(f, "could not find clause for id '{}'", clause_id)
            }
        }
    }
}

impl std::error::Error for BiblioError {}

/// References to one entry, grouped by the clause they occur in.
///
/// Consecutive references from the same clause fold into a single group
/// (the reference pane renders them as one row with a counter).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClauseRefs {
    pub clause_id: String,
    pub number: String,
    pub key: String,
    pub ref_ids: Vec<String>,
}

/// Read-only lookup structures derived from the flat biblio.
pub struct BiblioIndex {
    entries: Vec<BiblioEntry>,
    // positions into `entries`; duplicate ids are not validated, the
    // last occurrence wins
    by_id: HashMap<String, usize>,
    clauses: Vec<usize>,
    ref_parent_clause: HashMap<String, String>,
}

impl BiblioIndex {
    /// Build the index from the entry list and the externally supplied
    /// clause-to-references grouping.
    pub fn build(
        entries: Vec<BiblioEntry>,
        refs_by_clause: HashMap<String, Vec<String>>,
    ) -> Self {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut clauses = Vec::new();
        for (pos, entry) in entries.iter().enumerate() {
            by_id.insert(entry.id.clone(), pos);
            if entry.kind == EntryKind::Clause {
                clauses.push(pos);
            }
        }

        let mut ref_parent_clause = HashMap::new();
        for (clause_id, refs) in &refs_by_clause {
            for ref_id in refs {
                ref_parent_clause.insert(ref_id.clone(), clause_id.clone());
            }
        }

        BiblioIndex {
            entries,
            by_id,
            clauses,
            ref_parent_clause,
        }
    }

    /// All entries in their original (document) order.
    pub fn entries(&self) -> &[BiblioEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn by_id(&self, id: &str) -> Option<&BiblioEntry> {
        self.by_id.get(id).map(|&pos| &self.entries[pos])
    }

    /// The clause subsequence of `entries`, in document order.
    pub fn clauses(&self) -> impl Iterator<Item = &BiblioEntry> {
        self.clauses.iter().map(move |&pos| &self.entries[pos])
    }

    /// The clause id owning a cross-reference id, if any.
    pub fn ref_parent_clause(&self, ref_id: &str) -> Option<&str> {
        self.ref_parent_clause.get(ref_id).map(String::as_str)
    }

    /// List the clauses referencing `id`, sorted by clause number, with
    /// consecutive duplicates folded into one group.
    ///
    /// A referencing id with no owning clause, or an owning clause id
    /// absent from the index, is a logic error and fails loudly.
    pub fn references_for(&self, id: &str) -> Result<Vec<ClauseRefs>, BiblioError> {
        let entry = self.by_id(id).ok_or_else(|| BiblioError::UnknownEntry {
            id: id.to_string(),
        })?;

        let mut records: Vec<(&str, &BiblioEntry)> = Vec::with_capacity(entry.referencing_ids.len());
        for ref_id in &entry.referencing_ids {
            let clause_id =
                self.ref_parent_clause
                    .get(ref_id)
                    .ok_or_else(|| BiblioError::MissingRefParent {
                        ref_id: ref_id.clone(),
                    })?;
            let clause = self.by_id(clause_id).ok_or_else(|| BiblioError::MissingClause {
                clause_id: clause_id.clone(),
            })?;
            records.push((ref_id.as_str(), clause));
        }

        records.sort_by(|a, b| {
            compare_clause_numbers(
                a.1.number.as_deref().unwrap_or(""),
                b.1.number.as_deref().unwrap_or(""),
            )
        });

        let mut grouped: Vec<ClauseRefs> = Vec::new();
        for (ref_id, clause) in records {
            match grouped.last_mut() {
                Some(last) if last.clause_id == clause.id => {
                    last.ref_ids.push(ref_id.to_string());
                }
                _ => grouped.push(ClauseRefs {
                    clause_id: clause.id.clone(),
                    number: clause.number.clone().unwrap_or_default(),
                    key: clause.display_key().unwrap_or_default().to_string(),
                    ref_ids: vec![ref_id.to_string()],
                }),
            }
        }

        Ok(grouped)
    }
}
