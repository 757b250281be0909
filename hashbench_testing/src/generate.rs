//! Data generation utilities useful for testing.
use hashbench_core::Record;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates a slice of **unique** random values of the type.
    ///
    /// Values keep the order in which they were generated, so a seeded `rng` gives a reproducible
    /// slice.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Box<[Self]>
    where
        Self: Hash + Eq + Clone,
    {
        let mut seen = HashSet::new();
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value.clone()) {
                values.push(value);
            }
        }
        values.into_boxed_slice()
    }
}

/// Parameters for [`Generate`] implementations that generate codes.
pub struct CodeParams {
    min_length: usize,
    max_length: usize,
}

impl CodeParams {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Default for CodeParams {
    fn default() -> Self {
        Self {
            min_length: Record::CODE_LENGTH,
            max_length: Record::CODE_LENGTH,
        }
    }
}

/// Generates strings of decimal digits.
impl<R: Rng> Generate<R> for String {
    type GenerateParams = CodeParams;

    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
        let length = rng.random_range(params.min_length..=params.max_length);
        (0..length)
            .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
            .collect()
    }
}

impl<R: Rng> Generate<R> for Record {
    type GenerateParams = ();

    fn generate(rng: &mut R, _params: &Self::GenerateParams) -> Self {
        let code = String::generate(rng, &CodeParams::default());
        Record::new(code).unwrap()
    }
}

/// Generates `size` random records. Duplicates are possible.
pub fn generate_records<R: Rng>(rng: &mut R, size: usize) -> Vec<Record> {
    (0..size).map(|_| Record::generate(rng, &())).collect()
}

/// Generates `size` records with sequential codes starting from `start`.
pub fn sequential_records(start: usize, size: usize) -> Vec<Record> {
    (start..start + size)
        .map(|i| Record::new(format!("{:09}", i)).unwrap())
        .collect()
}

/// Provides capabilities to derive new random values by introducing minimal random changes.
///
/// Useful for generating random values that are very similar with each other.
pub trait Jitter<R: Rng>: Sized {
    fn jitter(&self, rng: &mut R) -> Option<Self>;
}

/// Replaces a single random digit of the code with a different digit.
impl<R: Rng> Jitter<R> for Record {
    fn jitter(&self, rng: &mut R) -> Option<Self> {
        let mut digits: Vec<u8> = self.code().bytes().collect();
        let idx = rng.random_range(0..digits.len());
        if !digits[idx].is_ascii_digit() {
            return None;
        }
        let shift = rng.random_range(1..10_u8);
        digits[idx] = b'0' + (digits[idx] - b'0' + shift) % 10;
        Record::new(String::from_utf8(digits).ok()?).ok()
    }
}
