//! Benchmark of division, multiplicative and digit-folding hashing over a fixed-capacity table
//! with separate chaining.
//!
//! - [`hashing`] - the compared hash strategies.
//! - [`chained`] - the instrumented table.
//! - [`benchmark`] - dataset generation, the concurrent experiment driver and CSV reporting.
pub mod benchmark;
pub mod chained;
pub mod hashing;
pub mod logger;
