//! Error definitions.
use std::path::PathBuf;
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug)]
pub enum HashBenchError {
    /// A key code does not have the fixed number of UTF-16 code units.
    #[error("Key code must have exactly {expected} UTF-16 code units, got {actual}.")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The benchmark configuration can not be executed.
    #[error("Invalid benchmark configuration: {0}.")]
    InvalidConfig(String),

    /// The worker pool that runs the experiments could not be started.
    #[error("Unable to build the worker pool: {0}.")]
    WorkerPool(String),

    /// The results could not be written to the destination file.
    #[error("Unable to write results to {path:?}.")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
