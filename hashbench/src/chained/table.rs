//! Implements [`InstrumentedTable`] for [`ChainedTable`].
use crate::chained::{Chain, ChainedTable, Node};
use hashbench_core::{HashStrategy, InstrumentedTable, Record};

impl<'a, S: HashStrategy> InstrumentedTable<'a> for ChainedTable<'a, S> {
    fn insert(&mut self, record: &'a Record) {
        let index = self.strategy.index(record, self.buckets.len());
        let bucket = &mut self.buckets[index];
        if bucket.is_some() {
            self.collisions += 1;
        }

        let mut tail = bucket;
        while let Some(node) = tail {
            tail = &mut node.next;
        }
        *tail = Some(Box::new(Node::new(record)));
        self.len += 1;
    }

    fn search(&mut self, record: &Record) -> bool {
        let index = self.strategy.index(record, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref();
        while let Some(node) = cursor {
            self.comparisons += 1;
            if node.record.code() == record.code() {
                return true;
            }
            cursor = node.next.as_deref();
        }
        false
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn collisions(&self) -> u64 {
        self.collisions
    }

    fn comparisons(&self) -> u64 {
        self.comparisons
    }

    fn reset_comparisons(&mut self) {
        self.comparisons = 0;
    }

    fn reset_counters(&mut self) {
        self.collisions = 0;
        self.comparisons = 0;
    }
}

impl<'a, S: HashStrategy> ChainedTable<'a, S> {
    /// Get the strategy that places the keys.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Iterate over the records of the bucket `index` in insertion order.
    ///
    /// Does not touch the comparison counter.
    pub fn chain(&self, index: usize) -> Chain<'_, 'a> {
        Chain {
            next: self.buckets[index].as_deref(),
        }
    }

    /// Get the number of records in the bucket `index`.
    pub fn chain_len(&self, index: usize) -> usize {
        self.chain(index).count()
    }

    /// Iterate over the chain lengths of all buckets.
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.buckets.len()).map(|index| self.chain_len(index))
    }

    /// Get the length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        self.chain_lengths().max().unwrap_or(0)
    }

    /// Get the number of non-empty buckets.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_some()).count()
    }
}
