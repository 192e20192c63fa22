//! Separate chaining table
//!
//! Fixed array of buckets, each an insertion-ordered list of keys.

use crate::digest::KeyDigest;
use crate::error::TableError;
use crate::hash::HashVariant;
use crate::table::{Lookup, Strategy, TableStats, WordTable};

/// String table resolving collisions by chaining
#[derive(Clone, Debug)]
pub struct ChainingTable {
    /// Keys per bucket, in arrival order
    pub(crate) buckets: Vec<Vec<String>>,

    /// Total keys across all buckets
    pub(crate) size: usize,
}

impl ChainingTable {
    /// Create an empty table with `capacity` buckets
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity { capacity });
        }

        Ok(ChainingTable {
            buckets: vec![Vec::new(); capacity],
            size: 0,
        })
    }

    /// Append `key` to its bucket
    ///
    /// Returns the bucket index. Duplicates are kept.
    pub fn insert(&mut self, key: &str, variant: HashVariant) -> Result<usize, TableError> {
        let bucket = variant.bucket(key, self.capacity());
        self.buckets[bucket].push(key.to_owned());
        self.size += 1;
        Ok(bucket)
    }

    /// Scan the key's bucket in insertion order
    ///
    /// One comparison per key inspected. Never fails.
    pub fn contains(&self, key: &str, variant: HashVariant) -> Result<Lookup, TableError> {
        let bucket = variant.bucket(key, self.capacity());
        let mut comparisons = 0;

        for stored in &self.buckets[bucket] {
            comparisons += 1;
            if stored == key {
                tracing::trace!(bucket, comparisons, "chain hit");
                return Ok(Lookup::hit(comparisons));
            }
        }

        tracing::trace!(bucket, comparisons, "chain miss");
        Ok(Lookup::miss(comparisons))
    }

    /// Number of keys chained in `bucket`
    pub fn bucket_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map_or(0, Vec::len)
    }

    /// Keys chained in `bucket`, in insertion order
    pub fn bucket(&self, bucket: usize) -> &[String] {
        self.buckets.get(bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate keys bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            capacity: self.capacity(),
            len: self.size,
            occupied_buckets: self.buckets.iter().filter(|chain| !chain.is_empty()).count(),
            longest_run: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    pub fn digest(&self) -> KeyDigest {
        KeyDigest::from_keys(self.iter())
    }
}

impl WordTable for ChainingTable {
    fn strategy(&self) -> Strategy {
        Strategy::Chaining
    }

    fn insert(&mut self, key: &str, variant: HashVariant) -> Result<usize, TableError> {
        ChainingTable::insert(self, key, variant)
    }

    fn contains(&self, key: &str, variant: HashVariant) -> Result<Lookup, TableError> {
        ChainingTable::contains(self, key, variant)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        ChainingTable::capacity(self)
    }

    fn stats(&self) -> TableStats {
        ChainingTable::stats(self)
    }

    fn digest(&self) -> KeyDigest {
        ChainingTable::digest(self)
    }
}
