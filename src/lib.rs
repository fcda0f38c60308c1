//! SpecMenu: search and TOC navigation core for rendered specification
//! documents
//!
//! A Rust/WASM implementation of the algorithmic core behind the
//! in-browser menu of a generated specification: fuzzy search over the
//! document's biblio, and synchronization of the table of contents with
//! the scroll position. Tooltip rendering, pin persistence, keyboard
//! shortcuts, and all other DOM wiring stay in the JS glue, which calls
//! in through the wasm boundaries.
//!
//! # Architecture
//!
//! ## Biblio (`biblio/`)
//! - `entry.rs` - Entry kinds and display-key derivation
//! - `index.rs` - BiblioIndex: by-id map, clause subsequence, reverse
//!   reference-to-clause map, grouped cross-reference listing
//! - `clause_number.rs` - Total order over dotted clause numbers
//!
//! ## Search (`search/`)
//! - `fuzzy.rs` - In-order fuzzy matching with chunk counting
//! - `relevance.rs` - Deterministic integer relevance score
//! - `engine.rs` - SearchEngine: fuzzy mode + clause-number mode,
//!   ranked and capped
//!
//! ## Navigation (`outline/`)
//! - `tree.rs` - Outline tree with transparent import flattening
//! - `tracker.rs` - ActiveClauseTracker: scroll position to active path
//! - `toc.rs` - TocRevealMapper: active path to TOC reveal set and
//!   scroll delta
//!
//! ## Scheduling
//! - `debounce.rs` - Cancel-and-restart settle windows for scroll and
//!   keyup bursts
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { SpecSearch, activeClausePath, revealToc } from 'specmenu';
//!
//! await init();
//!
//! const search = new SpecSearch(biblio);
//! const results = search.search('getvalue');
//!
//! window.addEventListener('scroll', () => {
//!   const path = activeClausePath(captureOutlineSnapshot());
//!   const { revealedIds, leafId, scrollDelta } = revealToc(path, captureTocSnapshot());
//!   applyReveal(revealedIds, leafId, scrollDelta);
//! });
//! ```

pub mod biblio;
pub mod config;
pub mod debounce;
pub mod outline;
pub mod search;

pub use biblio::*;
pub use config::*;
pub use debounce::*;
pub use outline::*;
pub use search::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("specmenu v{}", env!("CARGO_PKG_VERSION"))
}
