//! Configuration Module
//!
//! Construction-time parameters for a cache store.

use crate::policy::EvictionPolicy;

/// Default byte budget when none is specified
pub const DEFAULT_LIMIT: usize = 64 * 1024;

// == Cache Config ==
/// Parameters for building a cache store.
///
/// Both values are fixed for the lifetime of the store built from this
/// configuration; neither can be changed afterwards.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum total bytes (key plus value per entry) the cache may hold
    pub limit: usize,
    /// Eviction policy variant
    pub policy: EvictionPolicy,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a configuration with the given byte limit and the default
    /// LRU policy.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            policy: EvictionPolicy::Lru,
        }
    }

    // == Policy ==
    /// Selects the eviction policy.
    pub fn policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            policy: EvictionPolicy::Lru,
        }
    }
}
