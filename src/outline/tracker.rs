//! Active-clause tracking
//!
//! Maps the current scroll position to a path through the outline: the
//! chain of nested clauses whose content currently occupies the top of
//! the viewport. Geometry comes from a collaborator trait so the walk is
//! testable without a layout engine.

use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;

use super::tree::{clause_children, OutlineNode};

/// Vertical extent of a node, in viewport coordinates (the viewport top
/// is y = 0, positive y points down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Geometry queries the host must answer for outline nodes.
///
/// Queries are infallible: a host that cannot supply geometry for the
/// whole tree must fail when its `Layout` implementation is constructed,
/// not mid-walk.
pub trait Layout {
    fn bounding_box(&self, node: &OutlineNode) -> Rect;
    /// Collapsed top margin: the larger of the node's own and its
    /// heading's computed top margin.
    fn margin_top(&self, node: &OutlineNode) -> f64;
}

/// Computes the active path for the current viewport geometry.
pub struct ActiveClauseTracker<L: Layout> {
    layout: L,
    epsilon: f64,
}

impl<L: Layout> ActiveClauseTracker<L> {
    pub fn new(layout: L) -> Self {
        Self::with_epsilon(layout, MenuConfig::default().active_top_epsilon)
    }

    pub fn with_epsilon(layout: L, epsilon: f64) -> Self {
        Self { layout, epsilon }
    }

    /// Walk the outline from `root`, at each level selecting the last
    /// child straddling the viewport top (adjusted top edge within
    /// epsilon of it, bottom edge still below it), and descend into the
    /// selection. Returns the chain of selections, outermost first;
    /// empty when nothing straddles the top.
    pub fn compute<'a>(&self, root: &'a OutlineNode) -> Vec<&'a OutlineNode> {
        let mut path = Vec::new();
        let mut current = root;

        loop {
            let mut selected: Option<&OutlineNode> = None;
            for child in clause_children(current) {
                let rect = self.layout.bounding_box(child);
                let adjusted_top = rect.top - self.layout.margin_top(child);
                if adjusted_top <= self.epsilon && rect.bottom > 0.0 {
                    selected = Some(child);
                }
            }
            match selected {
                Some(child) => {
                    path.push(child);
                    current = child;
                }
                None => return path,
            }
        }
    }
}
