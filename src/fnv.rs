//! Deterministic FNV-1a hashing (64-bit).
//!
//! `ChainedHashMap` needs a hash that is stable across runs and
//! processes, so its default hasher is a fixed function rather than a
//! randomized `RandomState`. FNV-1a is cheap, has good distribution on
//! short string keys, and never produces an out-of-range bucket index
//! since the hash is reduced modulo the bucket count. Callers that want
//! a different trade-off can supply any `BuildHasher` instead.

use core::hash::{BuildHasher, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Streaming 64-bit FNV-1a hasher.
#[derive(Clone, Debug)]
pub struct Fnv1aHasher {
    hash: u64,
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Fnv1aHasher {
            hash: FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash ^= u64::from(byte);
            self.hash = self.hash.wrapping_mul(FNV_PRIME);
        }
    }
}

/// `BuildHasher` producing [`Fnv1aHasher`]s. The default hasher seam of
/// [`ChainedHashMap`](crate::ChainedHashMap).
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1aBuildHasher;

impl BuildHasher for Fnv1aBuildHasher {
    type Hasher = Fnv1aHasher;

    #[inline]
    fn build_hasher(&self) -> Fnv1aHasher {
        Fnv1aHasher::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fnv1a(bytes: &[u8]) -> u64 {
        let mut h = Fnv1aHasher::default();
        h.write(bytes);
        h.finish()
    }

    // Reference vectors from the FNV-1a 64-bit test suite.
    #[test]
    fn known_vectors() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(fnv1a(b"foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn deterministic_across_builders() {
        let b = Fnv1aBuildHasher;
        let mut h1 = b.build_hasher();
        let mut h2 = b.build_hasher();
        h1.write(b"vertex-42");
        h2.write(b"vertex-42");
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut h = Fnv1aHasher::default();
        h.write(b"foo");
        h.write(b"bar");
        assert_eq!(h.finish(), fnv1a(b"foobar"));
    }
}
