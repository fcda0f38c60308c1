//! Wasm boundary for search
//!
//! The browser glue constructs one `SpecSearch` from the biblio asset at
//! load time, then calls `search` on (debounced) keystrokes and
//! `referencesFor` when the reference pane opens. Results go back as
//! plain data; turning them into markup is the glue's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::biblio::entry::{BiblioEntry, EntryKind};
use crate::biblio::index::BiblioIndex;

use super::engine::{SearchEngine, SearchResult};

/// Shape of the biblio JSON asset.
#[derive(Deserialize)]
struct BiblioAsset {
    entries: Vec<BiblioEntry>,
    #[serde(default, rename = "refsByClause")]
    refs_by_clause: HashMap<String, Vec<String>>,
}

/// Flattened result row handed to the renderer.
#[derive(Serialize)]
struct ResultRow<'a> {
    key: &'a str,
    id: &'a str,
    #[serde(rename = "type")]
    kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relevance: Option<u32>,
}

impl<'a> ResultRow<'a> {
    fn from_result(result: &'a SearchResult<'a>) -> Self {
        Self {
            key: &result.key,
            id: &result.entry.id,
            kind: result.entry.kind,
            number: result.entry.number.as_deref(),
            relevance: result.relevance,
        }
    }
}

#[wasm_bindgen]
pub struct SpecSearch {
    engine: SearchEngine,
}

#[wasm_bindgen]
impl SpecSearch {
    /// Build the search engine from the parsed biblio asset
    /// (`{ entries, refsByClause }`).
    #[wasm_bindgen(constructor)]
    pub fn new(biblio: JsValue) -> Result<SpecSearch, JsValue> {
        let asset: BiblioAsset = serde_wasm_bindgen::from_value(biblio)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_asset(asset))
    }

    /// Build the search engine from the raw biblio JSON string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SpecSearch, JsValue> {
        let asset: BiblioAsset =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_asset(asset))
    }

    /// Ranked, capped results for a free-text query.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = self.engine.search(query);
        let rows: Vec<ResultRow> = results.iter().map(ResultRow::from_result).collect();
        serde_wasm_bindgen::to_value(&rows).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Clauses referencing the given entry, grouped and sorted for the
    /// reference pane.
    #[wasm_bindgen(js_name = referencesFor)]
    pub fn references_for(&self, id: &str) -> Result<JsValue, JsValue> {
        let groups = self
            .engine
            .index()
            .references_for(id)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&groups).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = entryCount)]
    pub fn entry_count(&self) -> usize {
        self.engine.index().entries().len()
    }
}

impl SpecSearch {
    fn from_asset(asset: BiblioAsset) -> Self {
        let index = BiblioIndex::build(asset.entries, asset.refs_by_clause);
        Self {
            engine: SearchEngine::new(index),
        }
    }
}
