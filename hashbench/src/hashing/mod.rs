//! Hash strategies compared by the benchmark.
//!
//! Each strategy is exposed both as a plain function of `(hash, capacity)` and as a variant of
//! [`Strategy`], which implements [`hashbench_core::HashStrategy`].
mod common;
pub mod division;
pub use division::division;
pub mod folding;
pub use folding::digit_folding;
pub mod multiplicative;
pub use multiplicative::multiplicative;
mod strategy;
pub use strategy::*;
