//! wordtab - fixed-capacity string hash tables with comparison accounting
//!
//! Core library providing:
//! - Two string hash variants (strided and dense) selectable per call
//! - Linear probing table with bounded probe loops
//! - Separate chaining table with insertion-ordered buckets
//! - Comparison counts returned from every lookup
//! - Layout-independent content digests

pub mod hash;
pub mod error;
pub mod table;
pub mod probing;
pub mod chaining;
pub mod digest;

pub use hash::HashVariant;
pub use error::TableError;
pub use table::{Lookup, Strategy, TableStats, WordTable};
pub use probing::LinearProbingTable;
pub use chaining::ChainingTable;
pub use digest::KeyDigest;
