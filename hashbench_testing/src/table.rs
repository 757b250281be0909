//! Utilities for testing table implementations.
use crate::generate::{Generate, Jitter};
use hashbench_core::{HashStrategy, InstrumentedTable, Record};
use rand::Rng;
use std::collections::HashSet;

/// A straightforward model of separate chaining: one `Vec` per bucket, records in insertion order.
///
/// Serves as the source of expected counter values for the tested tables.
pub struct ReferenceBuckets<'a, S: HashStrategy> {
    strategy: &'a S,
    buckets: Vec<Vec<&'a Record>>,
}

impl<'a, S: HashStrategy> ReferenceBuckets<'a, S> {
    /// Distributes `data` over `capacity` buckets with `strategy`.
    pub fn new(strategy: &'a S, capacity: usize, data: &'a [Record]) -> Self {
        let mut buckets = vec![Vec::new(); capacity];
        for record in data {
            buckets[strategy.index(record, capacity)].push(record);
        }
        Self { strategy, buckets }
    }

    /// The records of the bucket `index` in insertion order.
    pub fn chain(&self, index: usize) -> &[&'a Record] {
        &self.buckets[index]
    }

    /// Number of non-empty buckets.
    pub fn occupied(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    /// Number of inserts that found their bucket non-empty.
    pub fn collisions(&self) -> u64 {
        self.buckets
            .iter()
            .map(|b| b.len().saturating_sub(1) as u64)
            .sum()
    }

    /// Number of nodes a search for `record` visits.
    pub fn comparisons(&self, record: &Record) -> u64 {
        let chain = self.chain(self.strategy.index(record, self.buckets.len()));
        match chain.iter().position(|r| r.code() == record.code()) {
            Some(position) => position as u64 + 1,
            None => chain.len() as u64,
        }
    }
}

/// Inserts every record of `data` into `table` in order.
pub fn fill<'a, T: InstrumentedTable<'a>>(table: &mut T, data: &'a [Record]) {
    for record in data {
        table.insert(record);
    }
}

/// Tests that the collision counter of a freshly filled `table` matches the reference model.
pub fn test_collisions<'a, S: HashStrategy, T: InstrumentedTable<'a>>(
    strategy: &S,
    table: &T,
    data: &[Record],
) {
    let reference = ReferenceBuckets::new(strategy, table.capacity(), data);

    assert_eq!(table.len(), data.len());
    assert_eq!(table.collisions(), reference.collisions());
    assert_eq!(
        table.collisions(),
        (data.len() - reference.occupied()) as u64,
        "Every insert except the first one per bucket must be a collision"
    );
}

/// Tests key retrieval for a filled `table`.
///
/// Every record of `data` must be found, including by an equal copy. Random codes and
/// single-digit variations of stored codes that are not in `data` must not be found.
pub fn test_search<'a, R: Rng, T: InstrumentedTable<'a>>(
    rng: &mut R,
    table: &mut T,
    data: &[Record],
) {
    let keys: HashSet<&Record> = data.iter().collect();

    for record in data {
        assert!(table.search(record), "Record: {:?}", record);
    }
    for record in data.iter().take(16) {
        let copy = Record::new(record.code()).unwrap();
        assert!(table.search(&copy), "Record copy: {:?}", copy);
    }

    let mut non_existent_keys = Vec::new();
    while non_existent_keys.len() < data.len().div_ceil(3) {
        let candidate = if data.is_empty() || rng.random_bool(0.5) {
            Some(<Record as Generate<R>>::generate(rng, &()))
        } else {
            data[rng.random_range(0..data.len())].jitter(rng)
        };
        if let Some(key) = candidate.filter(|key| !keys.contains(key)) {
            non_existent_keys.push(key);
        }
    }
    for key in non_existent_keys {
        assert!(!table.search(&key), "Key: {:?}", key);
    }
}

/// Tests that searching `queries` in a `table` filled with `data` counts exactly the visited
/// nodes, and that resetting comparisons leaves collisions intact.
pub fn test_comparisons<'a, S: HashStrategy, T: InstrumentedTable<'a>>(
    strategy: &S,
    table: &mut T,
    data: &[Record],
    queries: &[Record],
) {
    let reference = ReferenceBuckets::new(strategy, table.capacity(), data);
    let collisions = table.collisions();

    table.reset_comparisons();
    assert_eq!(table.comparisons(), 0);

    let mut expected = 0;
    for query in queries {
        table.search(query);
        expected += reference.comparisons(query);
        assert_eq!(table.comparisons(), expected, "Query: {:?}", query);
    }

    table.reset_comparisons();
    assert_eq!(table.comparisons(), 0);
    assert_eq!(table.collisions(), collisions);

    table.reset_counters();
    assert_eq!(table.comparisons(), 0);
    assert_eq!(table.collisions(), 0);
}

/// Generates collision, search and comparison tests of a table type for each given strategy.
///
/// `$factory` is called as `$factory(capacity, strategy)` and must return a value implementing
/// [`InstrumentedTable`]. Strategies are given as `name => expression` pairs, each name becomes a
/// module holding the tests of that strategy.
#[macro_export]
macro_rules! generate_table_tests {
    ($factory:expr, $($name:ident => $strategy:expr),+ $(,)?) => {
        $(
            mod $name {
                use super::*;
                use rand::SeedableRng;
                use rand_chacha::ChaCha20Rng;
                use $crate::*;

                #[test]
                fn test_collisions() {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    let strategy = $strategy;

                    for capacity in [1, 7, 100, 1000, 10_000] {
                        let data = generate_records(&mut rng, 3000);
                        let mut table = ($factory)(capacity, strategy.clone());
                        $crate::fill(&mut table, &data);
                        $crate::test_collisions(&strategy, &table, &data);
                    }
                }

                #[test]
                fn test_search() {
                    let mut rng = ChaCha20Rng::seed_from_u64(43);

                    for capacity in [1, 7, 100, 1000] {
                        let data = generate_records(&mut rng, 2000);
                        let mut table = ($factory)(capacity, $strategy);
                        $crate::fill(&mut table, &data);
                        $crate::test_search(&mut rng, &mut table, &data);
                    }
                }

                #[test]
                fn test_comparisons() {
                    use rand::seq::IndexedRandom;

                    let mut rng = ChaCha20Rng::seed_from_u64(44);
                    let strategy = $strategy;

                    for capacity in [1, 7, 100, 1000] {
                        let data = generate_records(&mut rng, 2000);
                        let mut queries: Vec<_> =
                            data.choose_multiple(&mut rng, 500).cloned().collect();
                        queries.extend(generate_records(&mut rng, 100));

                        let mut table = ($factory)(capacity, strategy.clone());
                        $crate::fill(&mut table, &data);
                        $crate::test_comparisons(&strategy, &mut table, &data, &queries);
                    }
                }
            }
        )+
    };
}
