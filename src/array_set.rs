use core::fmt::Debug;

use crate::error::Error;
use crate::error::Result;
use crate::hash_table;
use crate::hash_table::ByteTable;
use crate::hasher::ByteHasher;
use crate::hasher::DefaultByteHasher;

/// A set of `[u8; K]` values backed by a [`ByteTable`] with zero-width
/// values.
///
/// # Examples
///
/// ```rust
/// use shift_hash::ArraySet;
///
/// let mut set: ArraySet<2> = ArraySet::new();
/// assert!(set.insert(*b"hi").unwrap());
/// assert!(!set.insert(*b"hi").unwrap());
/// assert!(set.contains(b"hi"));
/// ```
#[derive(Clone)]
pub struct ArraySet<const K: usize, H = DefaultByteHasher> {
    table: ByteTable<H>,
}

impl<const K: usize, H> PartialEq for ArraySet<K, H>
where
    H: ByteHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(&v))
    }
}

impl<const K: usize, H> Eq for ArraySet<K, H> where H: ByteHasher {}

impl<const K: usize, H> Debug for ArraySet<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<const K: usize> ArraySet<K, DefaultByteHasher> {
    /// Creates an empty set with the default hasher.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty set with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultByteHasher::default())
    }
}

impl<const K: usize> Default for ArraySet<K, DefaultByteHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize, H> ArraySet<K, H> {
    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the backing table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes every value, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    /// Returns an iterator over copies of the values in unspecified order.
    pub fn iter(&self) -> Iter<'_, K, H> {
        Iter {
            inner: self.table.iter(),
        }
    }
}

impl<const K: usize, H> ArraySet<K, H>
where
    H: ByteHasher,
{
    /// Creates an empty set using `hasher`.
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty set with at least `capacity` slots using `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: ByteTable::with_capacity_and_hasher(capacity, K, 0, hasher),
        }
    }

    /// Like [`with_capacity_and_hasher`](Self::with_capacity_and_hasher), but
    /// reports allocation failure instead of aborting.
    pub fn try_with_capacity_and_hasher(capacity: usize, hasher: H) -> Result<Self> {
        Ok(Self {
            table: ByteTable::try_with_capacity_and_hasher(capacity, K, 0, hasher)?,
        })
    }

    /// Grows the set so that `additional` more values fit without a resize.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExhausted`] or [`Error::OutOfMemory`] if the backing
    /// table cannot grow that far.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.table.reserve(additional)
    }

    /// Returns `true` if `value` is in the set.
    pub fn contains(&self, value: &[u8; K]) -> bool {
        self.table.contains(value)
    }

    /// Adds `value`, returning `true` if it was not already present.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExhausted`] or [`Error::OutOfMemory`] if the set
    /// cannot grow to take a new value.
    pub fn insert(&mut self, value: [u8; K]) -> Result<bool> {
        if self.table.contains(&value) {
            return Ok(false);
        }
        self.table.put(&value, &[])?;
        Ok(true)
    }

    /// Removes `value`, returning `true` if it was present.
    pub fn remove(&mut self, value: &[u8; K]) -> bool {
        match self.table.remove(value) {
            Ok(()) => true,
            Err(Error::NotFound) => false,
            Err(err) => unreachable!("fixed-width removal failed: {err}"),
        }
    }
}

/// An iterator over the values of an [`ArraySet`].
pub struct Iter<'a, const K: usize, H> {
    inner: hash_table::Iter<'a, H>,
}

impl<'a, const K: usize, H> Iterator for Iter<'a, K, H> {
    type Item = [u8; K];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| {
            let mut out = [0u8; K];
            out.copy_from_slice(k);
            out
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::hasher::Djb2;

    #[test]
    fn test_insert_contains_remove() {
        let mut set: ArraySet<4, _> = ArraySet::with_hasher(Djb2);
        assert!(set.insert(*b"abcd").unwrap());
        assert!(set.insert(*b"efgh").unwrap());
        assert!(!set.insert(*b"abcd").unwrap());
        assert_eq!(set.len(), 2);

        assert!(set.remove(b"abcd"));
        assert!(!set.remove(b"abcd"));
        assert!(!set.contains(b"abcd"));
        assert!(set.contains(b"efgh"));
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a: ArraySet<1> = ArraySet::new();
        let mut b: ArraySet<1> = ArraySet::with_capacity(64);
        for i in 0..20u8 {
            a.insert([i]).unwrap();
            b.insert([19 - i]).unwrap();
        }
        assert_eq!(a, b);

        b.remove(&[0]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_try_with_capacity_and_reserve() {
        let mut set: ArraySet<4, _> = ArraySet::try_with_capacity_and_hasher(32, Djb2).unwrap();
        assert_eq!(set.capacity(), 32);

        set.reserve(50).unwrap();
        let reserved = set.capacity();
        assert!(reserved * 3 / 4 >= 50, "capacity {reserved}");
        for i in 0..50u32 {
            assert!(set.insert(i.to_le_bytes()).unwrap());
        }
        assert_eq!(set.capacity(), reserved);
        assert_eq!(set.len(), 50);
    }

    #[test]
    fn test_iter_after_removals() {
        let mut set: ArraySet<2> = ArraySet::new();
        for i in 0..100u16 {
            set.insert(i.to_le_bytes()).unwrap();
        }
        for i in (0..100u16).filter(|i| i % 3 == 0) {
            assert!(set.remove(&i.to_le_bytes()));
        }

        let mut seen: Vec<u16> = set.iter().map(u16::from_le_bytes).collect();
        seen.sort_unstable();
        let expected: Vec<u16> = (0..100).filter(|i| i % 3 != 0).collect();
        assert_eq!(seen, expected);
    }
}
