/// Absolute value of a signed string hash.
///
/// Returned as `u32` so that `i32::MIN` maps to `2 ** 31` instead of overflowing.
#[inline]
pub const fn magnitude(hash: i32) -> u32 {
    hash.unsigned_abs()
}

/// Writes the decimal digits of `value` into `buffer` and returns the written part.
///
/// Most significant digit first, no leading zeros (`0` renders as a single digit).
#[inline]
pub fn decimal_digits(mut value: u32, buffer: &mut [u8; 10]) -> &[u8] {
    let mut start = buffer.len();
    loop {
        start -= 1;
        buffer[start] = (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buffer[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(0), 0);
        assert_eq!(magnitude(-7), 7);
        assert_eq!(magnitude(7), 7);
        assert_eq!(magnitude(i32::MIN), 1 << 31);
        assert_eq!(magnitude(i32::MAX), i32::MAX as u32);
    }

    #[test]
    fn test_decimal_digits() {
        let mut buffer = [0_u8; 10];
        assert_eq!(decimal_digits(0, &mut buffer), &[0]);
        assert_eq!(decimal_digits(12345, &mut buffer), &[1, 2, 3, 4, 5]);
        assert_eq!(
            decimal_digits(u32::MAX, &mut buffer),
            &[4, 2, 9, 4, 9, 6, 7, 2, 9, 5]
        );
    }
}
