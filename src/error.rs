//!
//! Error types of sparse array operations
//!
use thiserror::Error;

/// Result type for sparse array operations
pub type Result<T> = std::result::Result<T, SparseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    ///
    /// A transform that does not map zero to zero was applied in place.
    /// Densify first and modify the dense store instead.
    #[error("SparseArray zero modification: f(0) = {0} is not zero")]
    ZeroModification(String),

    #[error("position {position} is out of range for count {count}")]
    OutOfRange { position: u64, count: u64 },

    #[error("initial capacity must be positive")]
    InvalidCapacity,

    /// count does not fit in the address space of a dense store
    #[error("count {count} is too large to be stored densely")]
    TooLarge { count: u64 },
}
