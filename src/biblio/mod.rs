pub mod clause_number;
pub mod entry;
pub mod index;

pub use clause_number::*;
pub use entry::*;
pub use index::*;
