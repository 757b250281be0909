//! Configuration of a benchmark run.
use crate::hashing::Strategy;
use hashbench_core::HashBenchError;
use std::path::PathBuf;

/// Dataset sizes benchmarked when none are given.
pub const DEFAULT_DATASET_SIZES: [usize; 3] = [1_000_000, 5_000_000, 20_000_000];
/// Table capacities benchmarked when none are given.
pub const DEFAULT_CAPACITIES: [usize; 3] = [1_000, 10_000, 100_000];
/// Seed of both the dataset generator and the search sampler.
pub const DEFAULT_SEED: u64 = 12345;
/// Number of records searched per experiment.
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
/// File the results are written to.
pub const DEFAULT_OUTPUT: &str = "resultados_hash_otimizado.csv";

/// One experiment of the benchmark matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Experiment {
    pub dataset_size: usize,
    pub capacity: usize,
    pub strategy: Strategy,
}

impl std::fmt::Display for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "size={}, capacity={}, strategy={}",
            self.dataset_size, self.capacity, self.strategy
        )
    }
}

/// Parameters of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of records of each dataset tier. Tiers run one after another.
    pub dataset_sizes: Vec<usize>,
    /// Table capacities tried for every tier.
    pub capacities: Vec<usize>,
    /// Strategies tried for every capacity.
    pub strategies: Vec<Strategy>,
    pub seed: u64,
    /// Upper bound of records searched per experiment.
    pub sample_size: usize,
    /// Number of worker threads, `0` means one per available CPU.
    pub threads: usize,
    pub output: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            dataset_sizes: DEFAULT_DATASET_SIZES.to_vec(),
            capacities: DEFAULT_CAPACITIES.to_vec(),
            strategies: Strategy::ALL.to_vec(),
            seed: DEFAULT_SEED,
            sample_size: DEFAULT_SAMPLE_SIZE,
            threads: 0,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl BenchConfig {
    /// Checks that the configuration describes at least one runnable experiment.
    ///
    /// # Errors
    ///
    /// - [`HashBenchError::InvalidConfig`] if any of the lists is empty, if the sample size is
    ///   zero or if any capacity is zero.
    pub fn validate(&self) -> Result<(), HashBenchError> {
        let invalid = |reason: &str| Err(HashBenchError::InvalidConfig(reason.to_string()));

        if self.dataset_sizes.is_empty() {
            return invalid("no dataset sizes");
        }
        if self.capacities.is_empty() {
            return invalid("no table capacities");
        }
        if self.strategies.is_empty() {
            return invalid("no hash strategies");
        }
        if self.capacities.contains(&0) {
            return invalid("table capacity must be at least 1");
        }
        if self.sample_size == 0 {
            return invalid("search sample size must be at least 1");
        }
        Ok(())
    }

    /// Enumerates the capacity x strategy matrix for a dataset of `dataset_size` records.
    pub fn experiments(&self, dataset_size: usize) -> Vec<Experiment> {
        self.capacities
            .iter()
            .flat_map(|&capacity| {
                self.strategies.iter().map(move |&strategy| Experiment {
                    dataset_size,
                    capacity,
                    strategy,
                })
            })
            .collect()
    }

    /// Total number of experiments of the run.
    pub fn num_experiments(&self) -> usize {
        self.dataset_sizes.len() * self.capacities.len() * self.strategies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_experiments(), 27);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.sample_size, 10_000);
        assert_eq!(config.output, PathBuf::from("resultados_hash_otimizado.csv"));
    }

    #[test]
    fn test_experiments_order() {
        let config = BenchConfig {
            capacities: vec![10, 20],
            strategies: vec![Strategy::DigitFolding, Strategy::Division],
            ..Default::default()
        };
        let experiments: Vec<(usize, Strategy)> = config
            .experiments(5)
            .iter()
            .map(|e| (e.capacity, e.strategy))
            .collect();
        assert_eq!(
            experiments,
            [
                (10, Strategy::DigitFolding),
                (10, Strategy::Division),
                (20, Strategy::DigitFolding),
                (20, Strategy::Division),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_unrunnable_configs() {
        let cases = [
            BenchConfig {
                dataset_sizes: vec![],
                ..Default::default()
            },
            BenchConfig {
                capacities: vec![],
                ..Default::default()
            },
            BenchConfig {
                strategies: vec![],
                ..Default::default()
            },
            BenchConfig {
                capacities: vec![10, 0],
                ..Default::default()
            },
            BenchConfig {
                sample_size: 0,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(HashBenchError::InvalidConfig(_))),
                "{:?}",
                config
            );
        }
    }
}
