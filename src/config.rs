//! Configuration constants for the menu core
//!
//! None of these affect algorithmic correctness; they tune how much the
//! UI shows and how eagerly it recomputes.

use std::time::Duration;

/// Tunables shared by the search engine and the navigation trackers.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Maximum number of search results, applied uniformly to both
    /// fuzzy and clause-number query modes. Default: 50
    pub result_limit: usize,
    /// Minimum query length (in characters) before a search runs.
    /// Single-character scans are too broad to be useful. Default: 2
    pub min_query_chars: usize,
    /// Settle window for coalescing scroll/keyup bursts. Default: 150
    pub debounce_window_ms: u64,
    /// How far (px) a clause's adjusted top edge may sit below the
    /// viewport top and still count as "at the top". Default: 1.0
    pub active_top_epsilon: f64,
    /// Slack (px) before the TOC auto-scrolls to keep the active leaf
    /// visible. Default: 10.0
    pub toc_reveal_slack: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            result_limit: 50,
            min_query_chars: 2,
            debounce_window_ms: 150,
            active_top_epsilon: 1.0,
            toc_reveal_slack: 10.0,
        }
    }
}

impl MenuConfig {
    /// Zero-delay preset: every trigger settles immediately. Used to
    /// drive the debounced paths synchronously in tests.
    pub fn immediate() -> Self {
        Self {
            debounce_window_ms: 0,
            ..Self::default()
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }
}
