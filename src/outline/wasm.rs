//! Wasm boundary for navigation
//!
//! The scroll handler captures a geometry snapshot of the outline (ids,
//! kinds, boxes, collapsed margins) and the TOC (boxes plus the panel's
//! visible range) and hands them over; the core returns the active path
//! and the reveal instructions. Snapshots missing geometry fields are
//! rejected at deserialization, before any walk starts.

use std::collections::HashMap;

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use super::toc::{TocNode, TocPanel, TocRevealMapper};
use super::tracker::{ActiveClauseTracker, Layout, Rect};
use super::tree::{OutlineKind, OutlineNode};

/// One outline node with its geometry, as captured by the JS glue.
#[derive(Deserialize)]
struct OutlineSnapshot {
    #[serde(default)]
    id: String,
    #[serde(default)]
    kind: OutlineKind,
    top: f64,
    bottom: f64,
    /// Collapsed top margin (max of the node's and its heading's).
    #[serde(default, rename = "marginTop")]
    margin_top: f64,
    #[serde(default)]
    children: Vec<OutlineSnapshot>,
}

struct SnapshotLayout {
    // keyed by node id; built from the same snapshot as the tree, so
    // every clause-like node has a record
    geometry: HashMap<String, (Rect, f64)>,
}

impl Layout for SnapshotLayout {
    fn bounding_box(&self, node: &OutlineNode) -> Rect {
        self.geometry
            .get(&node.id)
            .map(|&(rect, _)| rect)
            .unwrap_or_default()
    }

    fn margin_top(&self, node: &OutlineNode) -> f64 {
        self.geometry
            .get(&node.id)
            .map(|&(_, margin)| margin)
            .unwrap_or_default()
    }
}

fn into_parts(snapshot: OutlineSnapshot, layout: &mut SnapshotLayout) -> OutlineNode {
    layout.geometry.insert(
        snapshot.id.clone(),
        (Rect::new(snapshot.top, snapshot.bottom), snapshot.margin_top),
    );
    let children = snapshot
        .children
        .into_iter()
        .map(|child| into_parts(child, layout))
        .collect();
    OutlineNode {
        id: snapshot.id,
        kind: snapshot.kind,
        children,
    }
}

/// Compute the active path for an outline geometry snapshot. Returns the
/// node ids from the document root down to the innermost active clause.
#[wasm_bindgen(js_name = activeClausePath)]
pub fn active_clause_path(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: OutlineSnapshot =
        serde_wasm_bindgen::from_value(snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut layout = SnapshotLayout {
        geometry: HashMap::new(),
    };
    let root = into_parts(snapshot, &mut layout);

    let tracker = ActiveClauseTracker::new(layout);
    let ids = js_sys::Array::new();
    for node in tracker.compute(&root) {
        ids.push(&JsValue::from_str(&node.id));
    }
    Ok(ids.into())
}

/// TOC snapshot: the panel's visible range plus the node tree.
#[derive(Deserialize)]
struct TocSnapshot {
    top: f64,
    bottom: f64,
    #[serde(default)]
    children: Vec<TocNode>,
}

/// Map an active path onto the TOC snapshot. Returns the reveal set,
/// leaf id, and scroll delta; a path element missing from the tree is
/// logged to the console and reported in the outcome, never thrown.
#[wasm_bindgen(js_name = revealToc)]
pub fn reveal_toc(path: JsValue, toc: JsValue) -> Result<JsValue, JsValue> {
    let path: Vec<String> =
        serde_wasm_bindgen::from_value(path).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let snapshot: TocSnapshot =
        serde_wasm_bindgen::from_value(toc).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let root = TocNode {
        id: String::new(),
        bounds: Rect::new(snapshot.top, snapshot.bottom),
        children: snapshot.children,
    };
    let panel = TocPanel {
        top: snapshot.top,
        bottom: snapshot.bottom,
    };

    let ids: Vec<&str> = path.iter().map(String::as_str).collect();
    let outcome = TocRevealMapper::default().reveal(&ids, &root, &panel);

    if let Some(missing) = &outcome.missing {
        web_sys::console::warn_1(
            &format!("could not find location in table of contents: {}", missing).into(),
        );
    }

    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
}
