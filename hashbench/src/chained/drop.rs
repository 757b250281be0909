//! Implements [`Drop`] for [`ChainedTable`].
use crate::chained::ChainedTable;
use hashbench_core::HashStrategy;

/// Unlinks the chains node by node.
///
/// The default recursive drop of `Box`-linked nodes uses one stack frame per node, which is not
/// affordable for chains that hold millions of records.
impl<S: HashStrategy> Drop for ChainedTable<'_, S> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            let mut next = bucket.take();
            while let Some(mut node) = next {
                next = node.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chained::{ChainedTable, Node};
    use crate::hashing::Strategy;
    use hashbench_core::Record;

    #[test]
    fn test_drop_long_chain_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(|| {
                let record = Record::new("000000000").unwrap();
                let mut table = ChainedTable::new(1, Strategy::Division);
                // Head insertion keeps the setup linear.
                for _ in 0..200_000 {
                    let next = table.buckets[0].take();
                    table.buckets[0] = Some(Box::new(Node { record: &record, next }));
                }
                drop(table);
            })
            .unwrap();
        handle.join().unwrap();
    }
}
