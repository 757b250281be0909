//! Fixed-capacity hash table with separate chaining and built-in work counters.
mod core;
pub use self::core::*;
mod ctors;
mod drop;
mod table;
