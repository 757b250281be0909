//! The benchmark driver: dataset generation, the experiment matrix and result reporting.
pub mod config;
pub use config::*;
pub mod dataset;
pub mod driver;
pub use driver::*;
pub mod experiment;
pub use experiment::*;
pub mod report;
