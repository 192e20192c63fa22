//! Shared table contract
//!
//! Both collision strategies expose the same operations so callers can hold
//! them as `Box<dyn WordTable>` and compare them side by side.

use crate::digest::KeyDigest;
use crate::error::TableError;
use crate::hash::HashVariant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single membership query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lookup {
    /// Whether an exactly equal key was found
    pub found: bool,

    /// Key comparisons performed by this query alone
    pub comparisons: usize,
}

impl Lookup {
    pub fn hit(comparisons: usize) -> Self {
        Lookup { found: true, comparisons }
    }

    pub fn miss(comparisons: usize) -> Self {
        Lookup { found: false, comparisons }
    }
}

/// Collision-resolution strategy of a table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    LinearProbing,
    Chaining,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LinearProbing => f.write_str("linear probing"),
            Strategy::Chaining => f.write_str("separate chaining"),
        }
    }
}

/// Collision profile of a populated table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Fixed number of slots or buckets
    pub capacity: usize,

    /// Keys stored, duplicates included
    pub len: usize,

    /// Slots (probing) or buckets (chaining) holding at least one key
    pub occupied_buckets: usize,

    /// Longest chain, or longest wrapping run of occupied slots
    pub longest_run: usize,
}

impl TableStats {
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.len as f64 / self.capacity as f64
        }
    }
}

/// Operations common to every table strategy
pub trait WordTable: Send + Sync {
    /// Which collision strategy backs this table
    fn strategy(&self) -> Strategy;

    /// Insert `key` using `variant` to choose its home bucket
    ///
    /// Returns the slot or bucket index the key was stored at.
    fn insert(&mut self, key: &str, variant: HashVariant) -> Result<usize, TableError>;

    /// Look `key` up using `variant`, counting comparisons
    ///
    /// The variant must match the one used at insert for the key to be found.
    fn contains(&self, key: &str, variant: HashVariant) -> Result<Lookup, TableError>;

    /// Number of stored keys, duplicates included
    fn len(&self) -> usize;

    /// Fixed capacity chosen at construction
    fn capacity(&self) -> usize;

    /// Collision profile
    fn stats(&self) -> TableStats;

    /// Layout-independent digest of the stored keys
    fn digest(&self) -> KeyDigest;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}
