pub mod toc;
pub mod tracker;
pub mod tree;
pub mod wasm;

pub use toc::*;
pub use tracker::*;
pub use tree::*;

#[cfg(test)]
mod tests;
