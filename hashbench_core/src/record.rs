//! Fixed-width key record stored in the benchmarked tables.
use crate::error::HashBenchError;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable key identified by a code of exactly [`Record::CODE_LENGTH`] UTF-16 code units.
///
/// Only the length of the code is validated. Codes are expected to be made of decimal digits, but
/// any characters are accepted.
///
/// # Examples
///
/// ```rust
/// use hashbench_core::Record;
///
/// let record = Record::new("123456789").unwrap();
/// assert_eq!(record.code(), "123456789");
/// assert_eq!(record.hash_value(), -1867378635);
/// assert!(Record::new("1234").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    code: Box<str>,
    hash: i32,
}

impl Record {
    /// Number of UTF-16 code units in a valid code.
    pub const CODE_LENGTH: usize = 9;

    /// Creates a record from the given `code`.
    ///
    /// # Errors
    ///
    /// - [`HashBenchError::InvalidKeyLength`] if `code` is not exactly
    ///   [`Record::CODE_LENGTH`] UTF-16 code units long, the same units [`string_hash`] runs over.
    pub fn new(code: impl Into<String>) -> Result<Self, HashBenchError> {
        let code = code.into();
        let length = code.encode_utf16().count();
        if length != Self::CODE_LENGTH {
            return Err(HashBenchError::InvalidKeyLength {
                expected: Self::CODE_LENGTH,
                actual: length,
            });
        }
        let hash = string_hash(&code);
        Ok(Self {
            code: code.into_boxed_str(),
            hash,
        })
    }

    /// The code of the record.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The signed 32-bit string hash of the code (see [`string_hash`]).
    #[inline]
    pub fn hash_value(&self) -> i32 {
        self.hash
    }
}

/// Hashes a string with the 31-polynomial `h = 31 * h + c` over its UTF-16 code units.
///
/// Arithmetic wraps at 32 bits, so the result may be negative. The function is stable across runs
/// and platforms, which keeps bucket assignments reproducible.
#[inline]
pub fn string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Record {
    type Err = HashBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        for code in ["", "1", "12345678", "1234567890", "123456789 "] {
            match Record::new(code) {
                Err(HashBenchError::InvalidKeyLength { expected, actual }) => {
                    assert_eq!(expected, 9);
                    assert_eq!(actual, code.encode_utf16().count());
                }
                other => panic!("Unexpected result for {:?}: {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_new_accepts_any_characters() {
        let record = Record::new("abc-def-g").unwrap();
        assert_eq!(record.code(), "abc-def-g");

        // Length is counted in UTF-16 code units, not bytes.
        assert!(Record::new("ççççççççç").is_ok());
    }

    #[test]
    fn test_new_counts_supplementary_characters_twice() {
        match Record::new("😀😀😀😀😀😀😀😀😀") {
            Err(HashBenchError::InvalidKeyLength { expected, actual }) => {
                assert_eq!(expected, 9);
                assert_eq!(actual, 18);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
        // Four surrogate pairs and a BMP character.
        assert!(Record::new("😀😀😀😀a").is_ok());
    }

    #[test]
    fn test_equality_follows_code() {
        let a = Record::new("000000001").unwrap();
        let b: Record = "000000001".parse().unwrap();
        let c = Record::new("000000002").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!(a.to_string(), "000000001");
    }

    #[test]
    fn test_string_hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("abc"), 96354);
        assert_eq!(string_hash("123456789"), -1867378635);
        assert_eq!(string_hash("000000000"), -2032408528);
        assert_eq!(string_hash("999999999"), 1344611257);
    }

    #[test]
    fn test_hash_value_is_cached_string_hash() {
        let record = Record::new("012345678").unwrap();
        assert_eq!(record.hash_value(), string_hash("012345678"));
        assert_eq!(record.hash_value(), 1575145652);
    }
}
