//! Orchestration of the whole benchmark matrix.
use crate::benchmark::config::BenchConfig;
use crate::benchmark::dataset::generate_dataset;
use crate::benchmark::experiment::{run_experiment, ExperimentResult};
use hashbench_core::{HashBenchError, Record};
use log::info;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Runs every experiment of a [`BenchConfig`] on a pool of worker threads.
///
/// Dataset tiers are processed one after another so that only one dataset is alive at a time.
/// Within a tier the experiments run concurrently, each on its own table, all reading the same
/// dataset.
pub struct Driver {
    config: BenchConfig,
    pool: ThreadPool,
}

impl Driver {
    /// Creates a driver for a validated `config`.
    ///
    /// # Errors
    ///
    /// - [`HashBenchError::InvalidConfig`] if `config` does not pass [`BenchConfig::validate`].
    /// - [`HashBenchError::WorkerPool`] if the worker threads can not be started.
    pub fn new(config: BenchConfig) -> Result<Self, HashBenchError> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .thread_name(|i| format!("hashbench-worker-{}", i))
            .build()
            .map_err(|e| HashBenchError::WorkerPool(e.to_string()))?;
        Ok(Self { config, pool })
    }

    /// Get the validated configuration the driver runs.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Get the number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs all tiers and returns one result per experiment.
    ///
    /// Results are ordered by tier, then capacity, then strategy, following the order of the
    /// configuration lists. A panicking experiment aborts the whole run.
    pub fn run(&self) -> Result<Vec<ExperimentResult>, HashBenchError> {
        info!(
            "Starting {} experiments on {} worker threads",
            self.config.num_experiments(),
            self.num_threads()
        );
        let mut results = Vec::with_capacity(self.config.num_experiments());
        for &dataset_size in &self.config.dataset_sizes {
            info!("Generating {} records for the next tier", dataset_size);
            let dataset = generate_dataset(dataset_size, self.config.seed)?;
            results.extend(self.run_tier(&dataset));
        }
        info!("All {} experiments finished", results.len());
        Ok(results)
    }

    /// Runs the capacity x strategy matrix over one `dataset` concurrently.
    pub fn run_tier(&self, dataset: &[Record]) -> Vec<ExperimentResult> {
        let experiments = self.config.experiments(dataset.len());
        let sample_size = self.config.sample_size;
        let seed = self.config.seed;

        self.pool.install(|| {
            experiments
                .par_iter()
                .map(|&experiment| run_experiment(dataset, experiment, sample_size, seed))
                .collect()
        })
    }
}
