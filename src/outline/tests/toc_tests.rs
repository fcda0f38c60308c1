use crate::outline::toc::{TocNode, TocPanel, TocRevealMapper};
use crate::outline::tracker::Rect;

fn node(id: &str, top: f64, bottom: f64, children: Vec<TocNode>) -> TocNode {
    TocNode::new(id, Rect::new(top, bottom), children)
}

fn sample_toc() -> TocNode {
    node(
        "",
        0.0,
        600.0,
        vec![
            node("c1", 0.0, 20.0, vec![]),
            node(
                "c2",
                20.0,
                200.0,
                vec![node("c2-1", 40.0, 60.0, vec![]), node("c2-2", 60.0, 80.0, vec![])],
            ),
        ],
    )
}

fn panel() -> TocPanel {
    TocPanel {
        top: 0.0,
        bottom: 600.0,
    }
}

#[test]
fn test_path_marks_ancestors_and_leaf() {
    let outcome = TocRevealMapper::default().reveal(&["c2", "c2-2"], &sample_toc(), &panel());
    assert_eq!(outcome.revealed_ids, vec!["c2", "c2-2"]);
    assert_eq!(outcome.leaf_id.as_deref(), Some("c2-2"));
    assert!(outcome.missing.is_none());
    assert_eq!(outcome.scroll_delta, 0.0);
}

#[test]
fn test_empty_path_reveals_nothing() {
    let outcome = TocRevealMapper::default().reveal(&[], &sample_toc(), &panel());
    assert!(outcome.revealed_ids.is_empty());
    assert!(outcome.leaf_id.is_none());
}

#[test]
fn test_missing_element_stops_walk_with_diagnostic() {
    let outcome =
        TocRevealMapper::default().reveal(&["c2", "not-in-toc", "c2-2"], &sample_toc(), &panel());
    // partial reveal set is kept, not rolled back
    assert_eq!(outcome.revealed_ids, vec!["c2"]);
    assert_eq!(outcome.missing.as_deref(), Some("not-in-toc"));
    assert!(outcome.leaf_id.is_none());
}

#[test]
fn test_match_is_per_level_not_global() {
    // c2-2 exists, but not at the first level
    let outcome = TocRevealMapper::default().reveal(&["c2-2"], &sample_toc(), &panel());
    assert_eq!(outcome.missing.as_deref(), Some("c2-2"));
    assert!(outcome.revealed_ids.is_empty());
}

// ============================================================================
// Leaf scroll delta
// ============================================================================

#[test]
fn test_leaf_below_panel_pushes_down() {
    let toc = node("", 0.0, 100.0, vec![node("c1", 95.0, 115.0, vec![])]);
    let panel = TocPanel {
        top: 0.0,
        bottom: 100.0,
    };
    let outcome = TocRevealMapper::default().reveal(&["c1"], &toc, &panel);
    // leaf top 95 + slack 10 > 100: scroll down by bottom - panel bottom
    assert_eq!(outcome.scroll_delta, 15.0);
}

#[test]
fn test_leaf_above_panel_pulls_up() {
    let toc = node("", 50.0, 600.0, vec![node("c1", 30.0, 45.0, vec![])]);
    let panel = TocPanel {
        top: 50.0,
        bottom: 600.0,
    };
    let outcome = TocRevealMapper::default().reveal(&["c1"], &toc, &panel);
    assert_eq!(outcome.scroll_delta, -20.0);
}

#[test]
fn test_visible_leaf_needs_no_scroll() {
    let outcome = TocRevealMapper::default().reveal(&["c1"], &sample_toc(), &panel());
    assert_eq!(outcome.scroll_delta, 0.0);
}

#[test]
fn test_slack_configures_push_down_threshold() {
    let toc = node("", 0.0, 100.0, vec![node("c1", 95.0, 115.0, vec![])]);
    let panel = TocPanel {
        top: 0.0,
        bottom: 100.0,
    };
    // with no slack, a top of 95 is still inside the panel
    let outcome = TocRevealMapper::with_slack(0.0).reveal(&["c1"], &toc, &panel);
    assert_eq!(outcome.scroll_delta, 0.0);
}

#[test]
fn test_delta_only_computed_for_the_leaf() {
    // ancestor c2 sits below the fold but only the leaf c2-1 counts,
    // and it is visible
    let toc = node(
        "",
        0.0,
        100.0,
        vec![node("c2", 150.0, 300.0, vec![node("c2-1", 20.0, 40.0, vec![])])],
    );
    let panel = TocPanel {
        top: 0.0,
        bottom: 100.0,
    };
    let outcome = TocRevealMapper::default().reveal(&["c2", "c2-1"], &toc, &panel);
    assert_eq!(outcome.scroll_delta, 0.0);
    assert_eq!(outcome.leaf_id.as_deref(), Some("c2-1"));
}
