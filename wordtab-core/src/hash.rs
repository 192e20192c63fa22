//! String hash variants
//!
//! Both variants walk the key's UTF-16 code units and accumulate in 32-bit
//! signed wrapping arithmetic, so bucket placement is stable across platforms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which string hash to use for a given insert or lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashVariant {
    /// Samples every `max(1, len / 8)`-th code unit, base 37
    Strided,

    /// Visits every code unit, base 31
    Dense,
}

impl HashVariant {
    /// Both variants, strided first
    pub const ALL: [HashVariant; 2] = [HashVariant::Strided, HashVariant::Dense];

    /// Raw 32-bit accumulator for `key`
    ///
    /// The empty string yields 0 for both variants.
    pub fn hash32(self, key: &str) -> i32 {
        match self {
            HashVariant::Strided => {
                let len = key.encode_utf16().count();
                let stride = (len / 8).max(1);
                key.encode_utf16()
                    .step_by(stride)
                    .fold(0i32, |hash, unit| hash.wrapping_mul(37).wrapping_add(i32::from(unit)))
            }
            HashVariant::Dense => key
                .encode_utf16()
                .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit))),
        }
    }

    /// Bucket index for `key` in a table of `capacity` slots
    ///
    /// Always in `[0, capacity)`. `capacity` must be non-zero; tables reject
    /// zero at construction so they never call this with it.
    #[inline]
    pub fn bucket(self, key: &str, capacity: usize) -> usize {
        debug_assert!(capacity > 0, "capacity must be positive");
        // unsigned_abs keeps i32::MIN in range (2^31)
        self.hash32(key).unsigned_abs() as usize % capacity
    }

    /// Lowercase name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            HashVariant::Strided => "strided",
            HashVariant::Dense => "dense",
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown variant name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash variant '{0}' (expected 'strided' or 'dense')")]
pub struct ParseHashVariantError(pub String);

impl FromStr for HashVariant {
    type Err = ParseHashVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strided" => Ok(HashVariant::Strided),
            "dense" => Ok(HashVariant::Dense),
            other => Err(ParseHashVariantError(other.to_string())),
        }
    }
}
