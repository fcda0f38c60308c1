//! Document outline tree
//!
//! The outline mirrors the rendered document's nesting of clause-like
//! elements. Import nodes are a packaging artifact: their children
//! belong to the importing parent's level, so traversal flattens them
//! transparently.

use serde::{Deserialize, Serialize};

/// Kind of an outline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutlineKind {
    #[default]
    Clause,
    Intro,
    Annex,
    /// Transparent container; its children count as children of its
    /// parent.
    Import,
    /// Anything else in the markup; never part of a path.
    Other,
}

/// One node of the outline tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineNode {
    pub id: String,
    #[serde(default)]
    pub kind: OutlineKind,
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(id: &str, kind: OutlineKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(id: &str, kind: OutlineKind, children: Vec<OutlineNode>) -> Self {
        Self {
            id: id.to_string(),
            kind,
            children,
        }
    }

    /// Whether the node can appear on an active path.
    pub fn is_clauselike(&self) -> bool {
        matches!(
            self.kind,
            OutlineKind::Clause | OutlineKind::Intro | OutlineKind::Annex
        )
    }
}

/// The clause-like children of `root`, with import nodes flattened into
/// their parent's sequence.
///
/// Each call starts a fresh traversal, so the sequence is restartable as
/// long as the tree is unchanged.
pub fn clause_children(root: &OutlineNode) -> ClauseChildren<'_> {
    ClauseChildren {
        stack: vec![root.children.iter()],
    }
}

/// Lazy iterator behind [`clause_children`]. The explicit stack holds
/// one child cursor per import node currently being flattened.
pub struct ClauseChildren<'a> {
    stack: Vec<std::slice::Iter<'a, OutlineNode>>,
}

impl<'a> Iterator for ClauseChildren<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.stack.last_mut() {
            match cursor.next() {
                Some(node) if node.kind == OutlineKind::Import => {
                    self.stack.push(node.children.iter());
                }
                Some(node) if node.is_clauselike() => return Some(node),
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
