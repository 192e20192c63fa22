//! Table errors

use thiserror::Error;

/// Errors raised by table construction, insertion and lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Capacity must be at least one slot
    #[error("invalid table capacity {capacity}: must be positive")]
    InvalidCapacity { capacity: usize },

    /// Every slot of a linear probing table was probed without finding
    /// an empty slot or the key
    #[error("table capacity {capacity} exceeded: every slot is occupied")]
    CapacityExceeded { capacity: usize },
}
