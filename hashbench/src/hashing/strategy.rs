//! Selection of a hash strategy by value.
use crate::hashing::{digit_folding, division, multiplicative};
use clap::ValueEnum;
use hashbench_core::HashStrategy;
use std::fmt::{Display, Formatter};

/// The hash strategies compared by the benchmark.
///
/// # Examples
///
/// ```rust
/// use hashbench::hashing::Strategy;
/// use hashbench_core::HashStrategy;
///
/// assert_eq!(Strategy::Division.index_for_hash(-7, 10), 7);
/// assert_eq!(Strategy::DigitFolding.index_for_hash(12345, 100), 51);
/// assert_eq!(Strategy::Multiplicative.index_for_hash(0, 100), 0);
/// assert_eq!(Strategy::DigitFolding.to_string(), "DigitFolding");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Strategy {
    /// See [`division`].
    Division,
    /// See [`multiplicative`].
    Multiplicative,
    /// See [`digit_folding`].
    DigitFolding,
}

impl Strategy {
    /// All strategies in report order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Division,
        Strategy::Multiplicative,
        Strategy::DigitFolding,
    ];
}

impl HashStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Division => "Division",
            Strategy::Multiplicative => "Multiplicative",
            Strategy::DigitFolding => "DigitFolding",
        }
    }

    #[inline]
    fn index_for_hash(&self, hash: i32, capacity: usize) -> usize {
        match self {
            Strategy::Division => division(hash, capacity),
            Strategy::Multiplicative => multiplicative(hash, capacity),
            Strategy::DigitFolding => digit_folding(hash, capacity),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
