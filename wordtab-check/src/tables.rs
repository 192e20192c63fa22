//! Table instances loaded from one word list
//!
//! Each instance pairs a table with the hash variant used for every insert
//! and lookup against it, so the set can compare strategies and variants
//! on identical input.

use crate::config::{InstanceSpec, TableSetConfig};
use crate::error::CheckError;
use wordtab_core::{
    ChainingTable, HashVariant, KeyDigest, LinearProbingTable, Lookup, Strategy, TableError,
    WordTable,
};

/// A table and the hash variant it is always driven with
pub struct Instance {
    /// Human-readable name, e.g. "separate chaining (strided)"
    pub label: String,

    /// Hash variant for every operation on `table`
    pub variant: HashVariant,

    /// Backing table
    pub table: Box<dyn WordTable>,
}

impl Instance {
    /// Build an empty instance from its spec
    pub fn new(spec: InstanceSpec, capacity: usize) -> Result<Self, TableError> {
        let table: Box<dyn WordTable> = match spec.strategy {
            Strategy::Chaining => Box::new(ChainingTable::new(capacity)?),
            Strategy::LinearProbing => Box::new(LinearProbingTable::new(capacity)?),
        };

        Ok(Instance {
            label: format!("{} ({})", spec.strategy, spec.variant),
            variant: spec.variant,
            table,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.table.strategy()
    }

    pub fn insert(&mut self, key: &str) -> Result<usize, TableError> {
        self.table.insert(key, self.variant)
    }

    pub fn contains(&self, key: &str) -> Result<Lookup, TableError> {
        self.table.contains(key, self.variant)
    }
}

/// Summary of a completed load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadReport {
    /// Words inserted into each instance
    pub words: usize,

    /// Digest every instance agreed on
    pub digest: KeyDigest,
}

/// Every configured instance, in report order
pub struct TableSet {
    instances: Vec<Instance>,
}

impl TableSet {
    /// Build empty instances as configured
    pub fn new(config: &TableSetConfig) -> Result<Self, CheckError> {
        config.validate()?;

        let instances = config
            .instances
            .iter()
            .map(|spec| Instance::new(*spec, config.capacity_for(spec.strategy)))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            instances = instances.len(),
            chaining_capacity = config.chaining_capacity,
            probing_capacity = config.probing_capacity,
            "table set created"
        );

        Ok(TableSet { instances })
    }

    /// Insert every word into every instance, in order
    ///
    /// Afterwards all instances must hold the same keys; a differing digest
    /// is reported as `DigestMismatch`. Inserts are not rolled back, so after
    /// any error the instances may hold different prefixes of the word list
    /// and the set should be discarded.
    pub fn populate<I, S>(&mut self, words: I) -> Result<LoadReport, CheckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expected = KeyDigest::empty();

        for word in words {
            let word = word.as_ref();
            for instance in &mut self.instances {
                instance.insert(word).map_err(|err| {
                    tracing::warn!(instance = %instance.label, %err, "word list does not fit");
                    err
                })?;
            }
            expected.add(word);
        }

        for instance in &self.instances {
            let digest = instance.table.digest();
            if digest != expected {
                return Err(CheckError::DigestMismatch {
                    label: instance.label.clone(),
                });
            }

            let stats = instance.table.stats();
            tracing::debug!(
                instance = %instance.label,
                len = stats.len,
                occupied = stats.occupied_buckets,
                longest_run = stats.longest_run,
                load_factor = stats.load_factor(),
                "instance populated"
            );
        }

        tracing::debug!(words = expected.count(), digest = %expected, "table set populated");

        Ok(LoadReport {
            words: expected.count(),
            digest: expected,
        })
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> TableSetConfig {
        TableSetConfig {
            chaining_capacity: 10,
            probing_capacity: 50,
            ..TableSetConfig::default()
        }
    }

    #[test]
    fn test_default_instances() {
        let set = TableSet::new(&small_config()).unwrap();
        let labels: Vec<_> = set.instances().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "separate chaining (strided)",
                "separate chaining (dense)",
                "linear probing (strided)",
                "linear probing (dense)",
            ]
        );
        assert_eq!(set.instances()[0].table.capacity(), 10);
        assert_eq!(set.instances()[3].table.capacity(), 50);
    }

    #[test]
    fn test_populate_every_instance() {
        let mut set = TableSet::new(&small_config()).unwrap();
        let report = set.populate(["cat", "dog", "hello", "cat"]).unwrap();

        assert_eq!(report.words, 4);
        assert_eq!(report.digest, KeyDigest::from_keys(["cat", "dog", "hello", "cat"]));
        for instance in set.instances() {
            assert_eq!(instance.table.len(), 4);
            assert!(instance.contains("hello").unwrap().found);
            assert!(!instance.contains("rat").unwrap().found);
        }
    }

    #[test]
    fn test_overfull_probing_instance() {
        let config = TableSetConfig {
            chaining_capacity: 10,
            probing_capacity: 2,
            instances: vec![InstanceSpec {
                strategy: Strategy::LinearProbing,
                variant: HashVariant::Dense,
            }],
        };
        let mut set = TableSet::new(&config).unwrap();

        let err = set.populate(["a", "b", "c"]).unwrap_err();
        assert!(matches!(
            err,
            CheckError::Table(TableError::CapacityExceeded { capacity: 2 })
        ));
    }

    /// Chaining table that accepts `dropped` without storing it
    struct LossyTable {
        inner: ChainingTable,
        dropped: &'static str,
    }

    impl WordTable for LossyTable {
        fn strategy(&self) -> Strategy {
            Strategy::Chaining
        }

        fn insert(&mut self, key: &str, variant: HashVariant) -> Result<usize, TableError> {
            if key == self.dropped {
                return Ok(0);
            }
            self.inner.insert(key, variant)
        }

        fn contains(&self, key: &str, variant: HashVariant) -> Result<Lookup, TableError> {
            self.inner.contains(key, variant)
        }

        fn len(&self) -> usize {
            self.inner.len()
        }

        fn capacity(&self) -> usize {
            self.inner.capacity()
        }

        fn stats(&self) -> wordtab_core::TableStats {
            self.inner.stats()
        }

        fn digest(&self) -> KeyDigest {
            self.inner.digest()
        }
    }

    #[test]
    fn test_digest_mismatch_names_instance() {
        let healthy = Instance::new(
            InstanceSpec {
                strategy: Strategy::Chaining,
                variant: HashVariant::Dense,
            },
            10,
        )
        .unwrap();
        let lossy = Instance {
            label: "lossy".to_string(),
            variant: HashVariant::Dense,
            table: Box::new(LossyTable {
                inner: ChainingTable::new(10).unwrap(),
                dropped: "dog",
            }),
        };
        let mut set = TableSet {
            instances: vec![healthy, lossy],
        };

        let err = set.populate(["cat", "dog", "hello"]).unwrap_err();
        match err {
            CheckError::DigestMismatch { label } => assert_eq!(label, "lossy"),
            other => panic!("expected DigestMismatch, got {other:?}"),
        }
        assert!(set.instances()[0].contains("dog").unwrap().found);
        assert!(!set.instances()[1].contains("dog").unwrap().found);
    }

    #[test]
    fn test_invalid_config() {
        let config = TableSetConfig {
            instances: Vec::new(),
            ..TableSetConfig::default()
        };
        assert!(matches!(TableSet::new(&config), Err(CheckError::InvalidConfig(_))));
    }
}
