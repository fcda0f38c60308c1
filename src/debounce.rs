//! Settle-window debouncing
//!
//! The expensive passes (full-index fuzzy scan, full-tree geometry walk)
//! run at most once per quiescence window. The model is a single pending
//! deadline: every trigger cancels the previous one and restarts the
//! window, and the owner polls for settlement from its own event loop.
//! There is never more than one invocation in flight, so a settled poll
//! always observes the most recent input snapshot.

use instant::Instant;
use std::time::Duration;

use wasm_bindgen::prelude::*;

/// Cancel-and-restart debouncer with an injectable settle window.
///
/// A zero window settles on the next poll, which lets tests drive the
/// debounced path synchronously.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a trigger, discarding any pending one.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// True once a trigger's window has elapsed; clears the pending
    /// state so each settled trigger is observed exactly once.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop the pending trigger, if any. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

/// Wasm-facing wrapper. The JS glue owns the actual timer; this gate
/// supplies the cancel-and-restart bookkeeping.
#[wasm_bindgen]
pub struct DebounceGate {
    inner: Debouncer,
}

#[wasm_bindgen]
impl DebounceGate {
    #[wasm_bindgen(constructor)]
    pub fn new(window_ms: u32) -> Self {
        Self {
            inner: Debouncer::new(Duration::from_millis(window_ms as u64)),
        }
    }

    pub fn trigger(&mut self) {
        self.inner.trigger();
    }

    pub fn poll(&mut self) -> bool {
        self.inner.poll()
    }

    #[wasm_bindgen(js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }
}
