//! Key hashing and slot reduction.
//!
//! The crate's provided hasher reproduces the reference behavior: the hash
//! of a key is the length of its textual representation, reduced modulo
//! capacity by the table layer. This is a deliberately weak placeholder, not
//! a quality hash: distinct keys of equal length always collide, which is
//! exactly the load the collision strategies must stay correct under. Any
//! other `BuildHasher` can be supplied at construction via
//! `FixedHashMap::with_hasher`.

use core::hash::{BuildHasher, Hash, Hasher};

/// Hasher whose output is the number of payload bytes written.
///
/// `write_u8` and `write_usize` are ignored: the standard `Hash` impls for
/// `str` and collections feed a terminator byte / length prefix through
/// those, which would skew the count away from the key's own length.
#[derive(Debug, Default)]
pub struct KeyLengthHasher {
    len: u64,
}

impl Hasher for KeyLengthHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.len += bytes.len() as u64;
    }

    fn write_u8(&mut self, _byte: u8) {}

    fn write_usize(&mut self, _n: usize) {}

    fn finish(&self) -> u64 {
        self.len
    }
}

/// `BuildHasher` for [`KeyLengthHasher`]; the crate default.
#[derive(Clone, Debug, Default)]
pub struct KeyLengthState;

impl BuildHasher for KeyLengthState {
    type Hasher = KeyLengthHasher;

    fn build_hasher(&self) -> Self::Hasher {
        KeyLengthHasher::default()
    }
}

/// Reduce a key's hash to a slot index. The modulo keeps every computed
/// index inside `0..capacity`.
pub(crate) fn home_slot<S, Q>(hasher: &S, q: &Q, capacity: usize) -> usize
where
    S: BuildHasher,
    Q: ?Sized + Hash,
{
    (hasher.hash_one(q) % capacity as u64) as usize
}
