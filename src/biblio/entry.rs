//! Biblio entry data structures
//!
//! An entry is one addressable thing in the rendered document: a clause,
//! a grammar production, an abstract operation, a defined term, a figure,
//! and so on. Field names mirror the biblio JSON asset emitted by the
//! build pipeline (`type`, `titleHTML`, `referencingIds`).

use serde::{Deserialize, Serialize};

/// The kind tag of a biblio entry.
///
/// This enum is closed: a biblio asset carrying an unknown `type` is
/// rejected when it is deserialized, before any index is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Clause,
    Production,
    Op,
    Term,
    Table,
    Figure,
    Example,
    Note,
    Step,
}

/// A single biblio entry.
///
/// Only `kind` and `id` are always present; the remaining fields are
/// populated per kind (`title`/`title_html`/`number` for clauses, `name`
/// for productions, `aoid` for operations, `term` for terms, `caption`
/// for tables/figures/examples/notes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiblioEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub id: String,
    /// Precomputed display key. When present it wins over derivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "titleHTML", skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    /// Dotted clause number such as `"14.7.5.5"` or `"A.2"` (annexes use
    /// letters). Clauses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aoid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Ids of other entries that reference this one, in document order.
    #[serde(default, rename = "referencingIds", skip_serializing_if = "Vec::is_empty")]
    pub referencing_ids: Vec<String>,
}

impl BiblioEntry {
    /// Derive the display key used for searching and result labels.
    ///
    /// Returns `None` when the entry has no usable key (e.g. a clause
    /// with neither `title` nor `titleHTML`); such entries stay in the
    /// index but are not searchable.
    pub fn display_key(&self) -> Option<&str> {
        if let Some(key) = self.key.as_deref() {
            return Some(key);
        }
        match self.kind {
            EntryKind::Clause => self.title.as_deref().or(self.title_html.as_deref()),
            EntryKind::Production => self.name.as_deref(),
            EntryKind::Op => self.aoid.as_deref(),
            EntryKind::Term => self.term.as_deref(),
            EntryKind::Table | EntryKind::Figure | EntryKind::Example | EntryKind::Note => {
                self.caption.as_deref()
            }
            EntryKind::Step => Some(self.id.as_str()),
        }
    }

    /// Convenience constructor for a clause entry.
    pub fn clause(id: &str, title: &str, number: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            number: Some(number.to_string()),
            ..Self::bare(EntryKind::Clause, id)
        }
    }

    /// Convenience constructor for an abstract operation entry.
    pub fn op(id: &str, aoid: &str) -> Self {
        Self {
            aoid: Some(aoid.to_string()),
            ..Self::bare(EntryKind::Op, id)
        }
    }

    /// Convenience constructor for a grammar production entry.
    pub fn production(id: &str, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::bare(EntryKind::Production, id)
        }
    }

    /// Convenience constructor for a defined-term entry.
    pub fn term(id: &str, term: &str) -> Self {
        Self {
            term: Some(term.to_string()),
            ..Self::bare(EntryKind::Term, id)
        }
    }

    /// An entry with only the kind and id set.
    pub fn bare(kind: EntryKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
            key: None,
            title: None,
            title_html: None,
            number: None,
            name: None,
            aoid: None,
            term: None,
            caption: None,
            referencing_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_per_kind() {
        assert_eq!(
            BiblioEntry::clause("sec-a", "Assignment Operators", "13.15").display_key(),
            Some("Assignment Operators")
        );
        assert_eq!(
            BiblioEntry::production("prod-stmt", "Statement").display_key(),
            Some("Statement")
        );
        assert_eq!(BiblioEntry::op("sec-get", "Get").display_key(), Some("Get"));
        assert_eq!(
            BiblioEntry::term("realm", "realm").display_key(),
            Some("realm")
        );
        assert_eq!(
            BiblioEntry::bare(EntryKind::Step, "step-1").display_key(),
            Some("step-1")
        );
    }

    #[test]
    fn test_precomputed_key_wins() {
        let mut entry = BiblioEntry::clause("sec-a", "Long Title", "1.1");
        entry.key = Some("Short".to_string());
        assert_eq!(entry.display_key(), Some("Short"));
    }

    #[test]
    fn test_clause_falls_back_to_title_html() {
        let mut entry = BiblioEntry::bare(EntryKind::Clause, "sec-a");
        assert_eq!(entry.display_key(), None);
        entry.title_html = Some("The <code>typeof</code> Operator".to_string());
        assert_eq!(entry.display_key(), Some("The <code>typeof</code> Operator"));
    }

    #[test]
    fn test_deserialize_from_asset_json() {
        let entry: BiblioEntry = serde_json::from_str(
            r#"{"type":"clause","id":"sec-let","title":"Let Declarations",
                "titleHTML":"Let Declarations","number":"14.3.1",
                "referencingIds":["_ref_1","_ref_2"]}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, EntryKind::Clause);
        assert_eq!(entry.number.as_deref(), Some("14.3.1"));
        assert_eq!(entry.referencing_ids.len(), 2);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result: Result<BiblioEntry, _> =
            serde_json::from_str(r#"{"type":"margin-note","id":"x"}"#);
        assert!(result.is_err());
    }
}
