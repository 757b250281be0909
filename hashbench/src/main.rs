use clap::Parser;
use hashbench::benchmark::report::write_results;
use hashbench::benchmark::{
    BenchConfig, Driver, DEFAULT_CAPACITIES, DEFAULT_DATASET_SIZES, DEFAULT_OUTPUT,
    DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
};
use hashbench::hashing::Strategy;
use hashbench::logger::initialize_logger;
use hashbench_core::HashBenchError;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hashbench")]
#[command(
    about = "Compare division, multiplicative and digit-folding hashing on a chained hash table"
)]
struct Args {
    /// Number of records of each dataset tier (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_DATASET_SIZES)]
    dataset_sizes: Vec<usize>,

    /// Table capacities tried for every tier (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_CAPACITIES)]
    capacities: Vec<usize>,

    /// Hash strategies tried for every capacity (comma-separated)
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = Strategy::ALL)]
    strategies: Vec<Strategy>,

    /// Seed of the dataset generator and the search sampler
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Maximum number of records searched per experiment
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Path of the CSV file with the results
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        Self {
            dataset_sizes: args.dataset_sizes,
            capacities: args.capacities,
            strategies: args.strategies,
            seed: args.seed,
            sample_size: args.sample_size,
            threads: args.threads,
            output: args.output,
        }
    }
}

fn run(config: BenchConfig) -> Result<(), HashBenchError> {
    let driver = Driver::new(config)?;
    let results = driver.run()?;
    let output = &driver.config().output;
    write_results(output, &results)?;
    info!("Results saved to {:?}", output);
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    match run(args.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_match_default_config() {
        let config: BenchConfig = Args::try_parse_from(["hashbench"]).unwrap().into();
        let default = BenchConfig::default();

        assert_eq!(config.dataset_sizes, default.dataset_sizes);
        assert_eq!(config.capacities, default.capacities);
        assert_eq!(config.strategies, default.strategies);
        assert_eq!(config.seed, default.seed);
        assert_eq!(config.sample_size, default.sample_size);
        assert_eq!(config.threads, default.threads);
        assert_eq!(config.output, default.output);
    }

    #[test]
    fn test_comma_separated_args() {
        let args = Args::try_parse_from([
            "hashbench",
            "--dataset-sizes",
            "100,200",
            "--strategies",
            "division,digit-folding",
            "--capacities",
            "10,20",
            "--seed",
            "7",
            "--sample-size",
            "50",
            "--threads",
            "2",
            "--output",
            "out.csv",
        ])
        .unwrap();
        let config = BenchConfig::from(args);

        assert_eq!(config.dataset_sizes, [100, 200]);
        assert_eq!(config.capacities, [10, 20]);
        assert_eq!(
            config.strategies,
            [Strategy::Division, Strategy::DigitFolding]
        );
        assert_eq!(config.seed, 7);
        assert_eq!(config.sample_size, 50);
        assert_eq!(config.threads, 2);
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Args::try_parse_from(["hashbench", "--strategies", "cuckoo"]).is_err());
    }
}
