use core::hash::BuildHasher;
use core::hash::Hasher;

/// A deterministic mapping from key bytes to a `u64` hash.
///
/// Equal byte sequences must hash identically for the lifetime of the table
/// that owns the hasher. Collisions are allowed.
///
/// Any `Fn(&[u8]) -> u64` is a `ByteHasher`, so a plain closure can be passed
/// wherever a hasher is expected.
pub trait ByteHasher {
    /// Hashes `bytes`, which are always exactly the table's key width.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;
}

impl<F> ByteHasher for F
where
    F: Fn(&[u8]) -> u64,
{
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        self(bytes)
    }
}

/// The DJB2 multiplicative byte hash (`h = h * 33 + byte`, seeded with 5381).
///
/// Cheap and stable across runs and platforms, with weak mixing in the low
/// bits for short keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Djb2;

impl ByteHasher for Djb2 {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        bytes.iter().fold(5381u64, |hash, &byte| {
            (hash << 5).wrapping_add(hash).wrapping_add(byte as u64)
        })
    }
}

/// Adapts any [`BuildHasher`] into a [`ByteHasher`].
///
/// The bytes are written raw, without a length prefix, so two tables with
/// the same builder state agree on every key's hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildHasherBytes<S>(pub S);

impl<S> ByteHasher for BuildHasherBytes<S>
where
    S: BuildHasher,
{
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        let mut hasher = self.0.build_hasher();
        hasher.write(bytes);
        hasher.finish()
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher installed when none is supplied: foldhash with a fixed
        /// seed, so hashes are reproducible between runs.
        pub type DefaultByteHasher = BuildHasherBytes<foldhash::fast::FixedState>;
    } else {
        /// The hasher installed when none is supplied.
        pub type DefaultByteHasher = Djb2;
    }
}
