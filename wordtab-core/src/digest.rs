//! Layout-independent key digests
//!
//! Lets a caller confirm that tables built with different strategies or hash
//! variants hold the same keys, without comparing them slot by slot.

use blake3::Hasher;
use std::fmt;

/// 32-byte BLAKE3 key hash
pub type KeyHash = [u8; 32];

/// XOR of per-key BLAKE3 hashes plus the number of keys folded in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyDigest {
    root: KeyHash,
    count: usize,
}

impl KeyDigest {
    /// Digest of no keys
    pub fn empty() -> Self {
        KeyDigest {
            root: [0u8; 32],
            count: 0,
        }
    }

    /// Fold every key in; order does not matter
    pub fn from_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut digest = Self::empty();
        for key in keys {
            digest.add(key);
        }
        digest
    }

    /// Fold a single key in
    pub fn add(&mut self, key: &str) {
        let hash = Self::hash_key(key);
        for (acc, byte) in self.root.iter_mut().zip(hash.iter()) {
            *acc ^= byte;
        }
        self.count += 1;
    }

    /// Hash a single key
    pub fn hash_key(key: &str) -> KeyHash {
        let mut hasher = Hasher::new();
        hasher.update(key.as_bytes());
        *hasher.finalize().as_bytes()
    }

    pub fn root(&self) -> &KeyHash {
        &self.root
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for KeyDigest {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.root[..8] {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, "/{}", self.count)
    }
}
