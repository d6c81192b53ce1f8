//! Cache Store Module
//!
//! Main cache engine combining the key index, the ordering structure,
//! byte-budget accounting, and hit/miss statistics.

use std::collections::HashMap;

use bytes::Bytes;
use tracing::debug;

use crate::capacity::ByteBudget;
use crate::config::CacheConfig;
use crate::entry::Entry;
use crate::error::{CacheError, Result};
use crate::list::EntryList;
use crate::policy::EvictionPolicy;
use crate::stats::CacheStats;

// == Cache Store ==
/// Bounded in-memory key/value store with policy-driven eviction.
///
/// The ordering structure owns every entry; the key index maps each key
/// to a stable slot handle into it, never to an owned copy. Lookups,
/// insertions, removals, and evictions are all O(1) amortized.
///
/// The store is single-threaded: mutating operations take `&mut self`
/// and there is no internal locking. Callers that share one instance
/// across threads must serialize access themselves.
#[derive(Debug)]
pub struct CacheStore {
    /// Ordering structure owning all entries
    list: EntryList,
    /// Key -> slot handle into the ordering structure
    index: HashMap<String, usize>,
    /// Byte-budget accounting
    budget: ByteBudget,
    /// Eviction policy variant, fixed at construction
    policy: EvictionPolicy,
    /// Lookup statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a new store from a configuration.
    pub fn new(config: CacheConfig) -> Self {
        debug!(limit = config.limit, policy = ?config.policy, "creating cache store");
        Self {
            list: EntryList::new(),
            index: HashMap::new(),
            budget: ByteBudget::new(config.limit),
            policy: config.policy,
            stats: CacheStats::new(),
        }
    }

    /// Creates a FIFO store with a capacity of `limit` bytes.
    pub fn fifo(limit: usize) -> Self {
        Self::new(CacheConfig::new(limit).policy(EvictionPolicy::Fifo))
    }

    /// Creates an LRU store with a capacity of `limit` bytes.
    pub fn lru(limit: usize) -> Self {
        Self::new(CacheConfig::new(limit).policy(EvictionPolicy::Lru))
    }

    // == Max Storage ==
    /// Returns the maximum number of bytes this store can hold.
    pub fn max_storage(&self) -> usize {
        self.budget.limit()
    }

    // == Remaining Storage ==
    /// Returns the number of unused bytes available.
    pub fn remaining_storage(&self) -> usize {
        self.budget.remaining()
    }

    // == Get ==
    /// Returns the value bound to `key`, if present.
    ///
    /// Records a hit or a miss. Under the LRU policy a hit also promotes
    /// the entry to most-recently-used; FIFO lookups never reorder.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.index.get(key) {
            Some(&slot) => {
                self.stats.record_hit();
                self.policy.on_access(&mut self.list, slot);
                self.list.get(slot).map(|entry| entry.value().clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Binds `value` to `key`, evicting entries as needed to make room.
    ///
    /// Overwriting an existing key releases the old entry first, so the
    /// binding re-enters the structure at the policy's fresh end and is
    /// accounted at the new size. Fails with no side effects when the
    /// pair on its own is larger than the whole byte budget.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Bytes>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        let insert_size = key.len() + value.len();

        if !self.budget.fits(insert_size) {
            debug!(
                key = %key,
                size = insert_size,
                limit = self.budget.limit(),
                "rejected oversize entry"
            );
            return Err(CacheError::EntryTooLarge {
                size: insert_size,
                limit: self.budget.limit(),
            });
        }

        // Displace any existing binding before re-inserting
        if let Some(slot) = self.index.remove(&key) {
            if let Some(old) = self.list.remove(slot) {
                self.budget.credit(old.size());
            }
        }

        while self.budget.remaining() < insert_size {
            if !self.evict_one() {
                break;
            }
        }

        let slot = self.policy.insert(&mut self.list, Entry::new(key.clone(), value));
        self.index.insert(key, slot);
        self.budget.charge(insert_size);
        debug_assert_eq!(self.index.len(), self.list.len());
        Ok(())
    }

    // == Remove ==
    /// Removes and returns the value bound to `key`, if present.
    ///
    /// Releases the entry's bytes back to the budget. Removal never
    /// touches the hit/miss counters.
    pub fn remove(&mut self, key: &str) -> Option<Bytes> {
        let slot = self.index.remove(key)?;
        let entry = self.list.remove(slot)?;
        self.budget.credit(entry.size());
        debug_assert_eq!(self.index.len(), self.list.len());
        Some(entry.into_value())
    }

    // == Contains ==
    /// Checks whether `key` is currently bound.
    ///
    /// Membership probes record neither a hit nor a miss and never
    /// promote the entry.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Length ==
    /// Returns the number of bindings currently cached.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the store holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Clear ==
    /// Drops every binding and returns byte usage to zero.
    ///
    /// The hit/miss/eviction counters count operations, not contents,
    /// and survive a clear.
    pub fn clear(&mut self) {
        debug!(dropped = self.len(), "cleared cache store");
        self.list.clear();
        self.index.clear();
        self.budget.reset();
    }

    // == Stats ==
    /// Returns a snapshot of the lookup statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Policy ==
    /// Returns the eviction policy this store was built with.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    // Private helpers

    /// Removes the active policy's next victim and releases its bytes.
    fn evict_one(&mut self) -> bool {
        match self.policy.victim(&mut self.list) {
            Some(victim) => {
                self.index.remove(victim.key());
                self.budget.credit(victim.size());
                self.stats.record_eviction();
                debug!(key = %victim.key(), freed = victim.size(), "evicted entry");
                true
            }
            None => false,
        }
    }

    /// Iterates resident entries from the structure's front to its back.
    pub(crate) fn iter_entries(&self) -> crate::list::Iter<'_> {
        self.list.iter()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
