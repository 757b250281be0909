//! Declares core types for [`ChainedTable`].
use crate::hashing::Strategy;
use hashbench_core::{HashStrategy, Record};
use std::fmt::{Debug, Formatter};

/// Hash table with a fixed number of buckets where colliding keys are chained in singly linked
/// lists.
///
/// The table never resizes and supports no deletion. It keeps two counters:
///
/// - `collisions` - inserts that landed in an already occupied bucket;
/// - `comparisons` - key comparisons performed by searches since the last reset.
///
/// The counters are plain integers: a table is meant to be owned by a single experiment.
///
/// # Examples
///
/// ```rust
/// use hashbench::chained::ChainedTable;
/// use hashbench::hashing::Strategy;
/// use hashbench_core::{InstrumentedTable, Record};
///
/// let records: Vec<Record> = ["000000001", "000000002", "000000003"]
///     .iter()
///     .map(|code| Record::new(*code).unwrap())
///     .collect();
///
/// let mut table = ChainedTable::from_records(1, Strategy::Division, &records);
/// assert_eq!(table.collisions(), 2);
///
/// assert!(table.search(&records[2]));
/// assert_eq!(table.comparisons(), 3);
/// ```
pub struct ChainedTable<'a, S: HashStrategy = Strategy> {
    #[doc(hidden)]
    pub buckets: Box<[Option<Box<Node<'a>>>]>,
    #[doc(hidden)]
    pub strategy: S,
    #[doc(hidden)]
    pub len: usize,
    #[doc(hidden)]
    pub collisions: u64,
    #[doc(hidden)]
    pub comparisons: u64,
}

impl<S: HashStrategy> Debug for ChainedTable<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedTable")
            .field("capacity", &self.buckets.len())
            .field("strategy", &self.strategy)
            .field("len", &self.len)
            .field("collisions", &self.collisions)
            .field("comparisons", &self.comparisons)
            .finish()
    }
}

/// A link of a bucket chain.
#[derive(Debug)]
pub struct Node<'a> {
    pub record: &'a Record,
    pub next: Option<Box<Node<'a>>>,
}

impl<'a> Node<'a> {
    #[inline]
    pub fn new(record: &'a Record) -> Self {
        Self { record, next: None }
    }
}

/// Iterator over the records of one bucket chain, head first.
#[derive(Debug, Clone)]
pub struct Chain<'t, 'a> {
    pub(super) next: Option<&'t Node<'a>>,
}

impl<'a> Iterator for Chain<'_, 'a> {
    type Item = &'a Record;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.record)
    }
}
