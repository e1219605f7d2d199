use core::fmt::Debug;

use crate::error::Result;
use crate::hash_table;
use crate::hash_table::ByteTable;
use crate::hasher::ByteHasher;
use crate::hasher::DefaultByteHasher;

#[inline(always)]
fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

/// A map from `[u8; K]` keys to `[u8; V]` values backed by a [`ByteTable`].
///
/// Widths are fixed by the type, so width errors cannot occur. Values are
/// copied in and copied out; nothing returned by the map borrows from its
/// slot array.
///
/// # Examples
///
/// ```rust
/// use shift_hash::ArrayMap;
///
/// let mut map: ArrayMap<4, 4> = ArrayMap::new();
/// map.insert([1, 0, 0, 0], [9, 0, 0, 0]).unwrap();
/// assert_eq!(map.get(&[1, 0, 0, 0]), Ok([9, 0, 0, 0]));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct ArrayMap<const K: usize, const V: usize, H = DefaultByteHasher> {
    table: ByteTable<H>,
}

impl<const K: usize, const V: usize, H> Debug for ArrayMap<K, V, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<const K: usize, const V: usize> ArrayMap<K, V, DefaultByteHasher> {
    /// Creates an empty map with the default hasher.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with at least `capacity` slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ArrayMap;
    /// #
    /// let map: ArrayMap<8, 8> = ArrayMap::with_capacity(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultByteHasher::default())
    }
}

impl<const K: usize, const V: usize> Default for ArrayMap<K, V, DefaultByteHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize, const V: usize, H> ArrayMap<K, V, H> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the backing table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.table.clear()
    }

    /// Returns an iterator over copies of the key-value pairs in unspecified
    /// order.
    pub fn iter(&self) -> Iter<'_, K, V, H> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over copies of the keys.
    pub fn keys(&self) -> impl Iterator<Item = [u8; K]> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over copies of the values.
    pub fn values(&self) -> impl Iterator<Item = [u8; V]> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Returns the backing byte table.
    pub fn as_table(&self) -> &ByteTable<H> {
        &self.table
    }
}

impl<const K: usize, const V: usize, H> ArrayMap<K, V, H>
where
    H: ByteHasher,
{
    /// Creates an empty map using `hasher`.
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty map with at least `capacity` slots using `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: ByteTable::with_capacity_and_hasher(capacity, K, V, hasher),
        }
    }

    /// Creates an empty map, reporting allocation failure as an error.
    pub fn try_with_capacity_and_hasher(capacity: usize, hasher: H) -> Result<Self> {
        Ok(Self {
            table: ByteTable::try_with_capacity_and_hasher(capacity, K, V, hasher)?,
        })
    }

    /// Grows the map until `additional` more entries fit without resizing.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.table.reserve(additional)
    }

    /// Returns a copy of the value stored for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) if the key is absent.
    pub fn get(&self, key: &[u8; K]) -> Result<[u8; V]> {
        self.table.get(key).map(to_array)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: &[u8; K]) -> bool {
        self.table.contains(key)
    }

    /// Inserts `key` with `value`, replacing the value of an existing key.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExhausted`](crate::Error::CapacityExhausted) or
    /// [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the map cannot
    /// grow to take a new key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ArrayMap;
    /// #
    /// let mut map: ArrayMap<1, 1> = ArrayMap::new();
    /// map.insert([1], [2]).unwrap();
    /// map.insert([1], [3]).unwrap();
    /// assert_eq!(map.get(&[1]), Ok([3]));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: [u8; K], value: [u8; V]) -> Result<()> {
        self.table.put(&key, &value)
    }

    /// Replaces the value of an existing key without inserting.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) if the key is absent.
    pub fn update(&mut self, key: &[u8; K], value: [u8; V]) -> Result<()> {
        self.table.set(key, &value)
    }

    /// Removes `key`, returning the value it held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ArrayMap;
    /// # use shift_hash::Error;
    /// #
    /// let mut map: ArrayMap<1, 1> = ArrayMap::new();
    /// map.insert([1], [2]).unwrap();
    /// assert_eq!(map.remove(&[1]), Ok([2]));
    /// assert_eq!(map.remove(&[1]), Err(Error::NotFound));
    /// ```
    pub fn remove(&mut self, key: &[u8; K]) -> Result<[u8; V]> {
        let value = self.get(key)?;
        self.table.remove(key)?;
        Ok(value)
    }
}

/// An iterator over the key-value pairs of an [`ArrayMap`].
pub struct Iter<'a, const K: usize, const V: usize, H> {
    inner: hash_table::Iter<'a, H>,
}

impl<'a, const K: usize, const V: usize, H> Iterator for Iter<'a, K, V, H> {
    type Item = ([u8; K], [u8; V]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (to_array(k), to_array(v)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use siphasher::sip::SipHasher;

    use super::*;
    use crate::Error;
    use crate::hasher::BuildHasherBytes;

    #[derive(Clone, Copy, Default)]
    struct SipBuilder;

    impl core::hash::BuildHasher for SipBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(0x0123, 0x4567)
        }
    }

    fn sip_map<const K: usize, const V: usize>() -> ArrayMap<K, V, BuildHasherBytes<SipBuilder>> {
        ArrayMap::with_hasher(BuildHasherBytes(SipBuilder))
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = sip_map::<4, 4>();
        assert!(map.is_empty());

        map.insert(*b"key1", *b"val1").unwrap();
        assert_eq!(map.get(b"key1"), Ok(*b"val1"));
        assert_eq!(map.get(b"key2"), Err(Error::NotFound));

        map.insert(*b"key1", *b"VAL1").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(b"key1"), Ok(*b"VAL1"));
    }

    #[test]
    fn test_update() {
        let mut map = sip_map::<2, 2>();
        assert_eq!(map.update(b"ab", *b"cd"), Err(Error::NotFound));
        assert!(map.is_empty());

        map.insert(*b"ab", *b"cd").unwrap();
        map.update(b"ab", *b"ef").unwrap();
        assert_eq!(map.get(b"ab"), Ok(*b"ef"));
    }

    #[test]
    fn test_remove() {
        let mut map = sip_map::<1, 1>();
        map.insert([1], [10]).unwrap();
        map.insert([2], [20]).unwrap();

        assert_eq!(map.remove(&[1]), Ok([10]));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&[1]));
        assert!(map.contains_key(&[2]));
        assert_eq!(map.remove(&[1]), Err(Error::NotFound));
    }

    #[test]
    fn test_many_insertions() {
        let mut map = sip_map::<8, 8>();
        for i in 0..1000u64 {
            map.insert(i.to_le_bytes(), (i * 3).to_le_bytes()).unwrap();
        }
        assert_eq!(map.len(), 1000);
        for i in (0..1000u64).step_by(2) {
            map.remove(&i.to_le_bytes()).unwrap();
        }
        assert_eq!(map.len(), 500);
        for i in 0..1000u64 {
            if i % 2 == 0 {
                assert!(!map.contains_key(&i.to_le_bytes()));
            } else {
                assert_eq!(map.get(&i.to_le_bytes()), Ok((i * 3).to_le_bytes()));
            }
        }
    }

    #[test]
    fn test_iterators() {
        let mut map: ArrayMap<1, 1> = ArrayMap::new();
        for i in 0..5u8 {
            map.insert([i], [i + 100]).unwrap();
        }

        let mut keys: Vec<_> = map.keys().collect();
        keys.sort();
        assert_eq!(keys, [[0u8], [1], [2], [3], [4]]);

        let mut values: Vec<_> = map.values().collect();
        values.sort();
        assert_eq!(values, [[100u8], [101], [102], [103], [104]]);

        assert_eq!(map.iter().count(), 5);
    }

    #[test]
    fn test_clear_and_reserve() {
        let mut map: ArrayMap<2, 2> = ArrayMap::default();
        map.reserve(50).unwrap();
        let capacity = map.capacity();
        for i in 0..50u16 {
            map.insert(i.to_le_bytes(), i.to_be_bytes()).unwrap();
        }
        assert_eq!(map.capacity(), capacity);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
    }

    #[test]
    fn test_debug_lists_entries() {
        let mut map: ArrayMap<1, 1> = ArrayMap::new();
        map.insert([7], [8]).unwrap();
        assert_eq!(format!("{map:?}"), "{[7]: [8]}");
    }

    #[test]
    fn test_accessors_with_closure_hasher() {
        fn summary<H>(map: &ArrayMap<1, 1, H>) -> (usize, usize, usize) {
            (map.len(), map.capacity(), map.keys().count())
        }

        let mut map = ArrayMap::<1, 1, _>::with_hasher(|_: &[u8]| 3u64);
        map.insert([1], [2]).unwrap();
        map.insert([4], [5]).unwrap();
        assert_eq!(summary(&map), (2, 16, 2));

        let mut values: Vec<[u8; 1]> = map.values().collect();
        values.sort_unstable();
        assert_eq!(values, [[2u8], [5u8]]);
        assert!(format!("{map:?}").contains("[1]: [2]"));
    }
}
