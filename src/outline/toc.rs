//! Table-of-contents reveal mapping
//!
//! Translates an active path into the set of TOC nodes to expand, which
//! node is the highlighted leaf, and how far the TOC panel must scroll
//! to keep that leaf visible. The output is plain data; toggling classes
//! and scrolling is the caller's job.

use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;

use super::tracker::Rect;

/// One node of the navigation tree mirroring the outline. `bounds` is
/// the node's box in the same coordinate space as the panel's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocNode {
    pub id: String,
    #[serde(flatten)]
    pub bounds: Rect,
    #[serde(default)]
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn new(id: &str, bounds: Rect, children: Vec<TocNode>) -> Self {
        Self {
            id: id.to_string(),
            bounds,
            children,
        }
    }
}

/// Visible scroll range of the TOC panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TocPanel {
    pub top: f64,
    pub bottom: f64,
}

/// What the caller should do to the TOC after a path change.
///
/// `revealed_ids` always describes the full desired state for the given
/// path, so applying it wholesale replaces any previous reveal. When
/// `missing` is set the walk stopped early: the set covers the levels
/// matched so far and the caller decides whether to keep or clear the
/// rest.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevealOutcome {
    pub revealed_ids: Vec<String>,
    pub leaf_id: Option<String>,
    /// Amount to add to the panel's scroll position so the leaf's box
    /// lies inside the visible range; 0 when it already does.
    pub scroll_delta: f64,
    /// Path element with no matching TOC child, if the walk aborted.
    /// A diagnostic, not an error.
    pub missing: Option<String>,
}

/// Maps active paths onto a TOC tree.
pub struct TocRevealMapper {
    slack: f64,
}

impl Default for TocRevealMapper {
    fn default() -> Self {
        Self {
            slack: MenuConfig::default().toc_reveal_slack,
        }
    }
}

impl TocRevealMapper {
    pub fn with_slack(slack: f64) -> Self {
        Self { slack }
    }

    /// Walk `path` (outermost id first) and the TOC tree in lockstep.
    pub fn reveal(&self, path: &[&str], toc: &TocNode, panel: &TocPanel) -> RevealOutcome {
        let mut outcome = RevealOutcome::default();
        let mut children = &toc.children;

        for (depth, target) in path.iter().enumerate() {
            let Some(node) = children.iter().find(|child| child.id == *target) else {
                outcome.missing = Some((*target).to_string());
                return outcome;
            };
            outcome.revealed_ids.push(node.id.clone());
            if depth == path.len() - 1 {
                outcome.leaf_id = Some(node.id.clone());
                outcome.scroll_delta = self.leaf_scroll_delta(&node.bounds, panel);
            }
            children = &node.children;
        }

        outcome
    }

    /// Minimal scroll adjustment keeping the leaf inside the panel:
    /// push down when its top has drifted below the panel's bottom
    /// (with slack), pull up when its top is above the panel's top.
    fn leaf_scroll_delta(&self, leaf: &Rect, panel: &TocPanel) -> f64 {
        if leaf.top + self.slack > panel.bottom {
            leaf.bottom - panel.bottom
        } else if leaf.top < panel.top {
            leaf.top - panel.top
        } else {
            0.0
        }
    }
}
