//! Linear probing table
//!
//! Fixed array of optional keys. Collisions move forward one slot at a time,
//! wrapping at the end. Every probe loop is bounded by the capacity, so a
//! full table reports `CapacityExceeded` instead of spinning.

use crate::digest::KeyDigest;
use crate::error::TableError;
use crate::hash::HashVariant;
use crate::table::{Lookup, Strategy, TableStats, WordTable};

/// Open-addressing string table with linear probing
#[derive(Clone, Debug)]
pub struct LinearProbingTable {
    /// One optional key per slot
    pub(crate) slots: Vec<Option<String>>,

    /// Occupied slot count
    pub(crate) size: usize,
}

impl LinearProbingTable {
    /// Create an empty table with `capacity` slots
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity { capacity });
        }

        Ok(LinearProbingTable {
            slots: vec![None; capacity],
            size: 0,
        })
    }

    /// Slots visited from `start`, wrapping, each at most once
    #[inline]
    fn probe_sequence(&self, start: usize) -> impl Iterator<Item = usize> {
        let capacity = self.slots.len();
        (0..capacity).map(move |step| (start + step) % capacity)
    }

    /// Store `key` in the first empty slot from its home bucket
    ///
    /// Duplicates are not detected; inserting a key twice uses two slots.
    pub fn insert(&mut self, key: &str, variant: HashVariant) -> Result<usize, TableError> {
        let start = variant.bucket(key, self.capacity());

        let free = self
            .probe_sequence(start)
            .find(|&slot| self.slots[slot].is_none());

        match free {
            Some(slot) => {
                self.slots[slot] = Some(key.to_owned());
                self.size += 1;
                Ok(slot)
            }
            None => {
                tracing::warn!(
                    capacity = self.capacity(),
                    %variant,
                    "linear probing insert on a full table"
                );
                Err(TableError::CapacityExceeded { capacity: self.capacity() })
            }
        }
    }

    /// Probe from the home bucket until the key or an empty slot
    ///
    /// Each occupied slot inspected counts as one comparison. A miss on a
    /// table with no empty slot is `CapacityExceeded`.
    pub fn contains(&self, key: &str, variant: HashVariant) -> Result<Lookup, TableError> {
        let start = variant.bucket(key, self.capacity());
        let mut comparisons = 0;

        for slot in self.probe_sequence(start) {
            match &self.slots[slot] {
                Some(stored) => {
                    comparisons += 1;
                    if stored == key {
                        tracing::trace!(slot, comparisons, "probe hit");
                        return Ok(Lookup::hit(comparisons));
                    }
                    // Collision, keep probing
                }
                None => {
                    tracing::trace!(slot, comparisons, "probe miss");
                    return Ok(Lookup::miss(comparisons));
                }
            }
        }

        Err(TableError::CapacityExceeded { capacity: self.capacity() })
    }

    /// Iterate keys in slot order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.as_deref())
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Longest wrapping run of occupied slots
    fn longest_cluster(&self) -> usize {
        if self.size == self.capacity() {
            return self.size;
        }

        // Start just after an empty slot so no run straddles the scan start
        let Some(empty) = self.slots.iter().position(Option::is_none) else {
            return self.size;
        };

        let mut longest = 0;
        let mut run = 0;
        for slot in self.probe_sequence(empty + 1) {
            if self.slots[slot].is_some() {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 0;
            }
        }
        longest
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            capacity: self.capacity(),
            len: self.size,
            occupied_buckets: self.size,
            longest_run: self.longest_cluster(),
        }
    }

    pub fn digest(&self) -> KeyDigest {
        KeyDigest::from_keys(self.iter())
    }
}

impl WordTable for LinearProbingTable {
    fn strategy(&self) -> Strategy {
        Strategy::LinearProbing
    }

    fn insert(&mut self, key: &str, variant: HashVariant) -> Result<usize, TableError> {
        LinearProbingTable::insert(self, key, variant)
    }

    fn contains(&self, key: &str, variant: HashVariant) -> Result<Lookup, TableError> {
        LinearProbingTable::contains(self, key, variant)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        LinearProbingTable::capacity(self)
    }

    fn stats(&self) -> TableStats {
        LinearProbingTable::stats(self)
    }

    fn digest(&self) -> KeyDigest {
        LinearProbingTable::digest(self)
    }
}
