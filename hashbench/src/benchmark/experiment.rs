//! A single experiment: one table, filled with a whole dataset and probed with a sample of it.
use crate::benchmark::config::Experiment;
use crate::benchmark::dataset::sample_records;
use crate::chained::ChainedTable;
use hashbench_core::{InstrumentedTable, Record};
use log::{debug, error, info, warn};
use std::time::{Duration, Instant};

/// Measurements of one [`Experiment`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    pub experiment: Experiment,
    /// Wall-clock time of inserting the whole dataset.
    pub insert_time: Duration,
    /// Collisions after inserting the whole dataset.
    pub collisions: u64,
    /// Wall-clock time of searching the whole sample.
    pub search_time: Duration,
    /// Comparisons performed by searching the whole sample.
    pub comparisons: u64,
    /// Number of sampled records.
    pub sample_size: usize,
    /// Number of sampled records the table found.
    pub found: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

/// Logs the experiment if the thread unwinds before the experiment completes.
struct FailureReporter<'e>(&'e Experiment);

impl Drop for FailureReporter<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            error!("Experiment failed: {}", self.0);
        }
    }
}

/// Runs `experiment` over `dataset`.
///
/// The table is filled with every record of `dataset`, then the comparison counter is reset and
/// up to `sample_size` records drawn with `seed` are searched. Both phases are timed separately.
pub fn run_experiment(
    dataset: &[Record],
    experiment: Experiment,
    sample_size: usize,
    seed: u64,
) -> ExperimentResult {
    let _reporter = FailureReporter(&experiment);
    debug!(">> Starting experiment: {}", experiment);

    let mut table = ChainedTable::new(experiment.capacity, experiment.strategy);

    let started = Instant::now();
    for record in dataset {
        table.insert(record);
    }
    let insert_time = started.elapsed();
    let collisions = table.collisions();

    table.reset_comparisons();
    let sample = sample_records(dataset, sample_size, seed);

    let started = Instant::now();
    let mut found = 0;
    for record in &sample {
        if table.search(record) {
            found += 1;
        }
    }
    let search_time = started.elapsed();
    let comparisons = table.comparisons();

    if found != sample.len() {
        warn!(
            "Experiment {} found only {} of {} sampled records",
            experiment,
            found,
            sample.len()
        );
    }

    let result = ExperimentResult {
        experiment,
        insert_time,
        collisions,
        search_time,
        comparisons,
        sample_size: sample.len(),
        found,
        longest_chain: table.longest_chain(),
        load_factor: table.load_factor(),
    };
    debug!(
        "Table shape for {}: load factor {:.2}, longest chain {}",
        experiment, result.load_factor, result.longest_chain
    );
    info!(
        "<< Finished experiment: {}, insert {}ms, collisions {}, search {}ms, comparisons {}",
        experiment,
        insert_time.as_millis(),
        collisions,
        search_time.as_millis(),
        comparisons
    );
    result
}
