//! Reproducible generation and sampling of benchmark data.
use hashbench_core::{HashBenchError, Record};
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generates `count` records with independent random 9-digit codes.
///
/// Leading zeros are allowed and codes are not required to be unique. The same `seed` always
/// yields the same sequence.
pub fn generate_dataset(count: usize, seed: u64) -> Result<Vec<Record>, HashBenchError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut dataset = Vec::with_capacity(count);
    for _ in 0..count {
        let code: String = (0..Record::CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
            .collect();
        dataset.push(Record::new(code)?);
    }
    Ok(dataset)
}

/// Draws `min(size, dataset.len())` distinct records of `dataset` in random order.
///
/// The same `seed` always draws the same records in the same order.
pub fn sample_records(dataset: &[Record], size: usize, seed: u64) -> Vec<&Record> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let amount = size.min(dataset.len());
    let mut indices = index::sample(&mut rng, dataset.len(), amount).into_vec();
    indices.shuffle(&mut rng);
    indices.into_iter().map(|i| &dataset[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_dataset_is_reproducible() {
        let first = generate_dataset(1000, 12345).unwrap();
        let second = generate_dataset(1000, 12345).unwrap();
        assert_eq!(first, second);

        let other = generate_dataset(1000, 54321).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_dataset_codes() {
        let dataset = generate_dataset(1000, 0).unwrap();
        assert_eq!(dataset.len(), 1000);
        for record in &dataset {
            assert_eq!(record.code().len(), 9);
            assert!(record.code().bytes().all(|b| b.is_ascii_digit()));
        }
        let leading_zero = dataset.iter().filter(|r| r.code().starts_with('0')).count();
        assert!(leading_zero > 0);
    }

    #[test]
    fn test_generate_dataset_prefix_stable() {
        let short = generate_dataset(10, 7).unwrap();
        let long = generate_dataset(100, 7).unwrap();
        assert_eq!(short[..], long[..10]);
    }

    #[test]
    fn test_generate_empty_dataset() {
        assert!(generate_dataset(0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_sample_records() {
        let dataset = generate_dataset(1000, 1).unwrap();
        let sample = sample_records(&dataset, 100, 12345);
        assert_eq!(sample.len(), 100);

        let positions: HashSet<*const Record> = sample.iter().map(|r| *r as *const _).collect();
        assert_eq!(positions.len(), 100, "Sampled records must be distinct");

        assert_eq!(sample, sample_records(&dataset, 100, 12345));
    }

    #[test]
    fn test_sample_larger_than_dataset() {
        let dataset = generate_dataset(50, 1).unwrap();
        let sample = sample_records(&dataset, 10_000, 12345);
        assert_eq!(sample.len(), 50);

        let mut sorted: Vec<&Record> = sample.clone();
        sorted.sort();
        let mut expected: Vec<&Record> = dataset.iter().collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
