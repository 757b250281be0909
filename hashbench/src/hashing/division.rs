//! Division-remainder hashing: the bucket is the remainder of the hash divided by the capacity.
use crate::hashing::common::magnitude;

/// Maps a signed string hash to `abs(hash) mod capacity`.
#[inline]
pub const fn division(hash: i32, capacity: usize) -> usize {
    magnitude(hash) as usize % capacity
}
