pub mod engine;
pub mod fuzzy;
pub mod relevance;
pub mod wasm;

pub use engine::*;
pub use fuzzy::*;
pub use relevance::*;
