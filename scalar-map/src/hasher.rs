//! Pass-through hash builder.
//!
//! [`FingerprintState`] uses a scalar's fingerprint directly as its hash, so
//! the bucket index is the fingerprint masked to the table size. Integer keys
//! land in consecutive buckets and floats that truncate to the same integer
//! share a bucket. The default [`foldhash::fast::FixedState`] mixes the
//! fingerprint instead.

use crate::scalar::fnv1a;
use core::hash::{BuildHasher, Hasher};

/// Hash builder that returns scalar fingerprints unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerprintState;

impl BuildHasher for FingerprintState {
    type Hasher = FingerprintHasher;

    #[inline]
    fn build_hasher(&self) -> FingerprintHasher {
        FingerprintHasher { hash: 0 }
    }
}

/// Hasher produced by [`FingerprintState`]
#[derive(Debug, Clone, Copy)]
pub struct FingerprintHasher {
    hash: u64,
}

impl Hasher for FingerprintHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    #[inline]
    fn write_u64(&mut self, n: u64) {
        self.hash = n;
    }

    // Arbitrary byte input folds through FNV-1a so the hasher stays usable
    // for non-scalar keys.
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.hash = u64::from(fnv1a(bytes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn test_passes_fingerprint_through() {
        let state = FingerprintState;
        assert_eq!(state.hash_one(Scalar::Integer(42)), 42);
        assert_eq!(state.hash_one(Scalar::Float(7.99)), 7);
        assert_eq!(state.hash_one(Scalar::from("a")), 0xe40c_292c);
    }

    #[test]
    fn test_bytes_fold_through_fnv1a() {
        let mut hasher = FingerprintState.build_hasher();
        hasher.write(b"foobar");
        assert_eq!(hasher.finish(), 0xbf9c_f968);
    }
}
