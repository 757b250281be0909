//! Core trait declarations for the whole project.
use crate::record::Record;
use std::fmt::Debug;

/// Maps a key to a bucket of a fixed-size table.
///
/// A strategy is a pure function of the key and the table capacity. It holds no per-table state,
/// so a single value may be shared by any number of tables running on different threads.
pub trait HashStrategy: Debug + Send + Sync {
    /// Stable human-readable name of the strategy, used in reports.
    fn name(&self) -> &'static str;

    /// Map the signed string hash of a key to a bucket index.
    ///
    /// # Notes
    ///
    /// - The result must be in `[0, capacity)`.
    /// - `capacity` must be at least 1. This is not checked.
    fn index_for_hash(&self, hash: i32, capacity: usize) -> usize;

    /// Map the given `record` to a bucket index.
    #[inline]
    fn index(&self, record: &Record, capacity: usize) -> usize {
        self.index_for_hash(record.hash_value(), capacity)
    }
}

/// A fixed-capacity hash table that counts the work it performs.
///
/// The table only borrows the records it stores, hence the `'a` lifetime.
pub trait InstrumentedTable<'a> {
    /// Insert the given `record`. Duplicates are allowed.
    fn insert(&mut self, record: &'a Record);

    /// Look up a record with the same code as `record`.
    ///
    /// Takes `&mut self` because every key comparison is counted.
    fn search(&mut self, record: &Record) -> bool;

    /// Get the number of buckets.
    fn capacity(&self) -> usize;

    /// Get the number of stored records.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64;

    /// Get the number of inserts that landed in an already occupied bucket.
    fn collisions(&self) -> u64;

    /// Get the number of key comparisons performed by searches since the last reset.
    fn comparisons(&self) -> u64;

    /// Zero the comparison counter, leaving the collision counter intact.
    fn reset_comparisons(&mut self);

    /// Zero both counters.
    fn reset_counters(&mut self);
}
