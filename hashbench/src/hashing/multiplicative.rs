//! Multiplicative hashing (Knuth): the fractional part of the hash scaled by the golden ratio
//! conjugate selects a position in the table.
use crate::hashing::common::magnitude;

/// The golden ratio conjugate, `(sqrt(5) - 1) / 2`, truncated to 10 decimal places.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.6180339887;

/// Maps a signed string hash to `floor(capacity * frac(abs(hash) * A))`.
///
/// The product is computed in `f64`, which represents every 32-bit magnitude exactly and keeps
/// enough fractional bits for the distribution not to degrade for large hashes.
#[inline]
pub fn multiplicative(hash: i32, capacity: usize) -> usize {
    let product = magnitude(hash) as f64 * GOLDEN_RATIO_CONJUGATE;
    let fraction = product - product.floor();
    // Rounding of `capacity * fraction` may land on `capacity` itself.
    ((capacity as f64 * fraction) as usize).min(capacity - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplicative_zero_hash() {
        for capacity in [1, 2, 10, 1000, 100_000] {
            assert_eq!(multiplicative(0, capacity), 0);
        }
    }

    #[test]
    fn test_multiplicative_known_values() {
        // 1 * A = 0.618...
        assert_eq!(multiplicative(1, 10), 6);
        assert_eq!(multiplicative(-1, 10), 6);
        // 2 * A = 1.236... -> 0.236...
        assert_eq!(multiplicative(2, 100), 23);
    }

    #[test]
    fn test_multiplicative_in_range() {
        for hash in [i32::MIN, i32::MIN + 1, -12345, 12345, i32::MAX] {
            for capacity in [1, 3, 1000, 100_000] {
                assert!(multiplicative(hash, capacity) < capacity);
            }
        }
    }
}
