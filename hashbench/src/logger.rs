//! Process-wide logging setup.
use env_logger::Builder;
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Progress of tiers and experiments is reported from these modules.
const LOG_TARGET: &str = "hashbench";

/// Builds the default filter: dependencies only report warnings, the benchmark reports progress.
fn builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(LOG_TARGET, LevelFilter::Info)
        .format_timestamp_millis();
    builder
}

/// Installs the `env_logger` backend once per process.
///
/// `RUST_LOG` overrides the defaults, e.g. `RUST_LOG=hashbench=debug` also shows the start and
/// the table shape of every experiment.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = builder();
        builder.parse_default_env();
        // Tests may race to install a logger, the first one wins.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{debug, info, Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_default_filter() {
        let logger = builder().build();

        assert!(enabled(&logger, "hashbench::benchmark::driver", Level::Info));
        assert!(!enabled(&logger, "hashbench::benchmark::experiment", Level::Debug));
        assert!(!enabled(&logger, "rayon_core", Level::Info));
        assert!(enabled(&logger, "rayon_core", Level::Warn));
    }

    #[test]
    fn test_initialize_twice() {
        initialize_logger();
        initialize_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
