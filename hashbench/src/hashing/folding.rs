//! Digit-folding hashing: the decimal digits of the hash are split into 2-digit groups that are
//! summed up.
use crate::hashing::common::{decimal_digits, magnitude};

/// Maps a signed string hash to the sum of 2-digit groups of `abs(hash)` modulo `capacity`.
///
/// The groups are taken from the most significant digit. If the number of digits is odd the last
/// group is a single digit, so `12345` folds into `12 + 34 + 5`.
#[inline]
pub fn digit_folding(hash: i32, capacity: usize) -> usize {
    let mut buffer = [0_u8; 10];
    let sum: usize = decimal_digits(magnitude(hash), &mut buffer)
        .chunks(2)
        .map(|group| {
            group
                .iter()
                .fold(0_usize, |acc, &digit| acc * 10 + digit as usize)
        })
        .sum();
    sum % capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_folding_odd_number_of_digits() {
        assert_eq!(digit_folding(12345, 100), 51);
        assert_eq!(digit_folding(-12345, 100), 51);
        assert_eq!(digit_folding(12345, 50), 1);
    }

    #[test]
    fn test_digit_folding_even_number_of_digits() {
        // 12 + 34
        assert_eq!(digit_folding(1234, 1000), 46);
        // 10 + 5 -> the second group keeps its leading zero
        assert_eq!(digit_folding(1005, 1000), 15);
    }

    #[test]
    fn test_digit_folding_extremes() {
        assert_eq!(digit_folding(0, 7), 0);
        assert_eq!(digit_folding(7, 1000), 7);
        // 21 + 47 + 48 + 36 + 48
        assert_eq!(digit_folding(i32::MIN, 1000), 200);
        // 21 + 47 + 48 + 36 + 47
        assert_eq!(digit_folding(i32::MAX, 1000), 199);
    }

    #[test]
    fn test_digit_folding_bounded_sum() {
        // At most five groups of at most 99.
        for hash in [999_999_999, -999_999_999, 1_999_999_999] {
            assert!(digit_folding(hash, 100_000) <= 5 * 99);
        }
    }
}
