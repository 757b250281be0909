//! Implements constructors for [`ChainedTable`].
use crate::chained::ChainedTable;
use hashbench_core::{HashStrategy, InstrumentedTable, Record};

impl<'a, S: HashStrategy> ChainedTable<'a, S> {
    /// Creates an empty table with `capacity` buckets that places keys with `strategy`.
    ///
    /// `capacity` must be at least 1 for inserts and searches to work, this is not checked here.
    pub fn new(capacity: usize, strategy: S) -> Self {
        Self {
            buckets: (0..capacity).map(|_| None).collect(),
            strategy,
            len: 0,
            collisions: 0,
            comparisons: 0,
        }
    }

    /// Creates a table and inserts every record of `data` in order.
    pub fn from_records(capacity: usize, strategy: S, data: &'a [Record]) -> Self {
        let mut table = Self::new(capacity, strategy);
        for record in data {
            table.insert(record);
        }
        table
    }
}
