//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Absent keys are not errors: `get` and `remove` signal them with
/// `Option::None`. The one failure the cache reports is a `set` whose
/// single entry can never fit inside the byte budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The key/value pair on its own is larger than the whole budget
    #[error("entry of {size} bytes exceeds the cache limit of {limit} bytes")]
    EntryTooLarge { size: usize, limit: usize },
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
