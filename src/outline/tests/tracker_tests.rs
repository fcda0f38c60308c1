use std::collections::HashMap;

use crate::outline::tracker::{ActiveClauseTracker, Layout, Rect};
use crate::outline::tree::{OutlineKind, OutlineNode};

/// Fixed geometry table standing in for the layout engine.
struct TableLayout {
    boxes: HashMap<String, Rect>,
    margins: HashMap<String, f64>,
}

impl TableLayout {
    fn new(boxes: &[(&str, f64, f64)]) -> Self {
        Self {
            boxes: boxes
                .iter()
                .map(|&(id, top, bottom)| (id.to_string(), Rect::new(top, bottom)))
                .collect(),
            margins: HashMap::new(),
        }
    }

    fn with_margin(mut self, id: &str, margin: f64) -> Self {
        self.margins.insert(id.to_string(), margin);
        self
    }
}

impl Layout for TableLayout {
    fn bounding_box(&self, node: &OutlineNode) -> Rect {
        self.boxes[&node.id]
    }

    fn margin_top(&self, node: &OutlineNode) -> f64 {
        self.margins.get(&node.id).copied().unwrap_or(0.0)
    }
}

fn clause(id: &str, children: Vec<OutlineNode>) -> OutlineNode {
    OutlineNode::with_children(id, OutlineKind::Clause, children)
}

fn path_ids(tracker: &ActiveClauseTracker<TableLayout>, root: &OutlineNode) -> Vec<String> {
    tracker
        .compute(root)
        .iter()
        .map(|n| n.id.clone())
        .collect()
}

#[test]
fn test_straddling_clause_chain_becomes_path() {
    // c2 straddles the viewport top; within it, c2-1 was scrolled past
    // but c2-2 straddles
    let root = clause(
        "root",
        vec![
            clause("c1", vec![]),
            clause("c2", vec![clause("c2-1", vec![]), clause("c2-2", vec![])]),
        ],
    );
    let layout = TableLayout::new(&[
        ("c1", -500.0, -100.0),
        ("c2", -100.0, 900.0),
        ("c2-1", -100.0, -20.0),
        ("c2-2", -20.0, 900.0),
    ]);
    let tracker = ActiveClauseTracker::new(layout);
    assert_eq!(path_ids(&tracker, &root), vec!["c2", "c2-2"]);
}

#[test]
fn test_empty_path_when_nothing_straddles_top() {
    // document scrolled to the very top: first clause still below the fold
    let root = clause("root", vec![clause("c1", vec![])]);
    let layout = TableLayout::new(&[("c1", 200.0, 900.0)]);
    let tracker = ActiveClauseTracker::new(layout);
    assert!(path_ids(&tracker, &root).is_empty());
}

#[test]
fn test_path_stops_where_no_child_qualifies() {
    let root = clause("root", vec![clause("c1", vec![clause("c1-1", vec![])])]);
    let layout = TableLayout::new(&[("c1", -10.0, 900.0), ("c1-1", 300.0, 600.0)]);
    let tracker = ActiveClauseTracker::new(layout);
    assert_eq!(path_ids(&tracker, &root), vec!["c1"]);
}

#[test]
fn test_margin_extends_the_top_test() {
    // top edge at 20 is past epsilon, but a 30px collapsed margin pulls
    // the adjusted edge to -10
    let root = clause("root", vec![clause("c1", vec![])]);
    let layout = TableLayout::new(&[("c1", 20.0, 900.0)]).with_margin("c1", 30.0);
    let tracker = ActiveClauseTracker::new(layout);
    assert_eq!(path_ids(&tracker, &root), vec!["c1"]);
}

#[test]
fn test_epsilon_boundary() {
    // adjusted top exactly at epsilon qualifies; just past it does not
    let root = clause("root", vec![clause("c1", vec![])]);
    let at_epsilon = TableLayout::new(&[("c1", 1.0, 900.0)]);
    assert_eq!(
        path_ids(&ActiveClauseTracker::new(at_epsilon), &root),
        vec!["c1"]
    );
    let past_epsilon = TableLayout::new(&[("c1", 1.5, 900.0)]);
    assert!(path_ids(&ActiveClauseTracker::new(past_epsilon), &root).is_empty());
}

#[test]
fn test_clause_fully_above_viewport_is_not_active() {
    // bottom edge at the viewport top no longer counts
    let root = clause("root", vec![clause("c1", vec![])]);
    let layout = TableLayout::new(&[("c1", -500.0, 0.0)]);
    let tracker = ActiveClauseTracker::new(layout);
    assert!(path_ids(&tracker, &root).is_empty());
}

#[test]
fn test_last_qualifying_child_wins() {
    // both qualify (overlapping geometry); the later sibling is taken
    let root = clause("root", vec![clause("c1", vec![]), clause("c2", vec![])]);
    let layout = TableLayout::new(&[("c1", -40.0, 10.0), ("c2", -5.0, 900.0)]);
    let tracker = ActiveClauseTracker::new(layout);
    assert_eq!(path_ids(&tracker, &root), vec!["c2"]);
}

#[test]
fn test_import_children_participate_at_parent_level() {
    let root = clause(
        "root",
        vec![OutlineNode::with_children(
            "",
            OutlineKind::Import,
            vec![clause("imported", vec![])],
        )],
    );
    let layout = TableLayout::new(&[("imported", -10.0, 500.0)]);
    let tracker = ActiveClauseTracker::new(layout);
    assert_eq!(path_ids(&tracker, &root), vec!["imported"]);
}

#[test]
fn test_custom_epsilon() {
    let root = clause("root", vec![clause("c1", vec![])]);
    let layout = TableLayout::new(&[("c1", 40.0, 900.0)]);
    let tracker = ActiveClauseTracker::with_epsilon(layout, 50.0);
    assert_eq!(path_ids(&tracker, &root), vec!["c1"]);
}
