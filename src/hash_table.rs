use alloc::alloc::handle_alloc_error;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::Debug;

use log::debug;
use log::trace;

use crate::error::Error;
use crate::error::Result;
use crate::hasher::ByteHasher;
use crate::hasher::DefaultByteHasher;

/// Smallest slot array a table will allocate.
pub const MIN_CAPACITY: usize = 1 << 4;

/// Largest slot array a table will grow to.
pub const MAX_CAPACITY: usize = 1 << 30;

/// Maximum ratio of occupied slots to capacity after any insert completes.
pub const LOAD_FACTOR: f64 = 0.75;

/// Largest population a table of `capacity` slots may hold.
#[inline(always)]
pub(crate) fn target_load_factor(capacity: usize) -> usize {
    ((capacity as u128 * 3) / 4) as usize
}

/// Distance travelled walking forward from `from` to `to`, wrapping at
/// `capacity`.
#[inline(always)]
fn displacement(from: usize, to: usize, capacity: usize) -> usize {
    if to >= from {
        to - from
    } else {
        to + capacity - from
    }
}

#[inline(always)]
fn home_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// State of one position in the slot array. The hash is the raw value the
/// hasher produced for the key, so the home slot can be derived for any
/// capacity without touching the key bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied { hash: u64 },
}

/// Outcome of a linear probe for a key.
enum Probe {
    /// The key lives at this index.
    Found(usize),
    /// The probe stopped at this empty index without meeting the key.
    Vacant(usize),
    /// Every slot was visited without finding the key or an empty slot.
    Cycled,
}

/// Allocates `capacity` empty slots and a zeroed payload of `capacity *
/// stride` bytes.
fn allocate(capacity: usize, stride: usize) -> Result<(Vec<Slot>, Vec<u8>)> {
    let oom = || Error::OutOfMemory { slots: capacity };
    let bytes = capacity.checked_mul(stride).ok_or_else(oom)?;

    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity).map_err(|_| oom())?;
    slots.resize(capacity, Slot::Empty);

    let mut payload = Vec::new();
    payload.try_reserve_exact(bytes).map_err(|_| oom())?;
    payload.resize(bytes, 0);

    Ok((slots, payload))
}

#[cold]
fn allocation_failure(capacity: usize, stride: usize) -> ! {
    let bytes = capacity.saturating_mul(stride.max(1));
    match Layout::array::<u8>(bytes) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => panic!("allocation size overflow"),
    }
}

/// An open-addressing hash table over fixed-width byte keys and values.
///
/// Every key is exactly [`key_width`](Self::key_width) bytes and every value
/// exactly [`value_width`](Self::value_width) bytes; keys compare byte-wise.
/// Keys and values are copied in on insert and never aliased with caller
/// memory.
///
/// Collisions are resolved by linear probing. Removal does not leave
/// tombstones: the entries following a freed slot are shifted back so that
/// every key stays reachable from its home slot without crossing an empty
/// slot, which lets lookups stop at the first empty slot they meet.
///
/// The table doubles its capacity once an insert would push the load factor
/// past [`LOAD_FACTOR`]. Growth briefly holds both the old and the new slot
/// array, so peak memory during a resize is about three times the old array.
///
/// ## Example
///
/// ```rust
/// use shift_hash::ByteTable;
///
/// let mut table = ByteTable::new(4, 4);
/// table.put(&[1, 0, 0, 0], &[9, 0, 0, 0]).unwrap();
/// table.put(&[2, 0, 0, 0], &[8, 0, 0, 0]).unwrap();
/// assert_eq!(table.get(&[1, 0, 0, 0]), Ok(&[9, 0, 0, 0][..]));
///
/// table.remove(&[1, 0, 0, 0]).unwrap();
/// assert!(table.get(&[1, 0, 0, 0]).is_err());
/// assert_eq!(table.get(&[2, 0, 0, 0]), Ok(&[8, 0, 0, 0][..]));
/// ```
#[derive(Clone)]
pub struct ByteTable<H = DefaultByteHasher> {
    slots: Vec<Slot>,
    payload: Vec<u8>,

    populated: usize,
    max_capacity: usize,

    key_width: usize,
    value_width: usize,

    hasher: H,
}

impl<H> Debug for ByteTable<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::String;
        use alloc::string::ToString;

        let capacity = self.capacity();
        f.debug_struct("ByteTable")
            .field("key_width", &self.key_width)
            .field("value_width", &self.value_width)
            .field("populated", &self.populated)
            .field("capacity", &capacity)
            .field(
                "displacements",
                &self
                    .slots
                    .iter()
                    .enumerate()
                    .map(|(index, slot)| match *slot {
                        Slot::Empty => "..".to_string(),
                        Slot::Occupied { hash } => format!(
                            "{:02}",
                            displacement(home_index(hash, capacity), index, capacity)
                        ),
                    })
                    .collect::<Vec<_>>()
                    .chunks(16)
                    .map(|row| row.join(", "))
                    .collect::<Vec<String>>(),
            )
            .finish()
    }
}

impl ByteTable<DefaultByteHasher> {
    /// Creates an empty table with [`MIN_CAPACITY`] slots and the default
    /// hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// #
    /// let table = ByteTable::new(8, 16);
    /// assert!(table.is_empty());
    /// assert_eq!(table.key_width(), 8);
    /// assert_eq!(table.value_width(), 16);
    /// ```
    pub fn new(key_width: usize, value_width: usize) -> Self {
        Self::with_capacity(MIN_CAPACITY, key_width, value_width)
    }

    /// Creates an empty table with at least `capacity` slots, clamped to
    /// `[MIN_CAPACITY, MAX_CAPACITY]`, and the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// #
    /// let table = ByteTable::with_capacity(100, 4, 4);
    /// assert_eq!(table.capacity(), 100);
    ///
    /// let small = ByteTable::with_capacity(1, 4, 4);
    /// assert_eq!(small.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize, key_width: usize, value_width: usize) -> Self {
        Self::with_capacity_and_hasher(
            capacity,
            key_width,
            value_width,
            DefaultByteHasher::default(),
        )
    }
}

impl<H> ByteTable<H> {
    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.payload.fill(0);
        self.populated = 0;
    }

    /// Returns an iterator over `(key, value)` pairs in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// #
    /// let mut table = ByteTable::new(1, 1);
    /// table.put(&[1], &[10]).unwrap();
    /// table.put(&[2], &[20]).unwrap();
    ///
    /// let mut pairs: Vec<_> = table.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(&[1u8][..], &[10u8][..]), (&[2u8][..], &[20u8][..])]);
    /// ```
    pub fn iter(&self) -> Iter<'_, H> {
        Iter {
            table: self,
            index: 0,
        }
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the number of slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity the table will not grow past.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns the fixed key width in bytes.
    pub fn key_width(&self) -> usize {
        self.key_width
    }

    /// Returns the fixed value width in bytes.
    pub fn value_width(&self) -> usize {
        self.value_width
    }

    /// Returns the hasher the table was created with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    #[inline(always)]
    fn stride(&self) -> usize {
        self.key_width + self.value_width
    }

    #[inline(always)]
    fn key_at(&self, index: usize) -> &[u8] {
        &self.payload[index * self.stride()..][..self.key_width]
    }

    #[inline(always)]
    fn value_at(&self, index: usize) -> &[u8] {
        &self.payload[index * self.stride() + self.key_width..][..self.value_width]
    }

    #[inline(always)]
    fn value_at_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.stride() + self.key_width;
        &mut self.payload[start..][..self.value_width]
    }
}

impl<H> ByteTable<H>
where
    H: ByteHasher,
{
    /// Creates an empty table using `hasher`, aborting through the global
    /// allocation error handler if the slot array cannot be allocated.
    ///
    /// See [`try_with_capacity_and_hasher`](Self::try_with_capacity_and_hasher)
    /// for the fallible version.
    pub fn with_capacity_and_hasher(
        capacity: usize,
        key_width: usize,
        value_width: usize,
        hasher: H,
    ) -> Self {
        let stride = key_width.saturating_add(value_width);
        match Self::try_with_capacity_and_hasher(capacity, key_width, value_width, hasher) {
            Ok(table) => table,
            Err(_) => allocation_failure(capacity.clamp(MIN_CAPACITY, MAX_CAPACITY), stride),
        }
    }

    /// Creates an empty table using `hasher`, reporting
    /// [`Error::OutOfMemory`] instead of aborting when allocation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// # use shift_hash::Djb2;
    /// #
    /// let table = ByteTable::try_with_capacity_and_hasher(32, 4, 4, Djb2).unwrap();
    /// assert_eq!(table.capacity(), 32);
    /// ```
    pub fn try_with_capacity_and_hasher(
        capacity: usize,
        key_width: usize,
        value_width: usize,
        hasher: H,
    ) -> Result<Self> {
        Self::build(capacity, MAX_CAPACITY, key_width, value_width, hasher)
    }

    pub(crate) fn build(
        capacity: usize,
        max_capacity: usize,
        key_width: usize,
        value_width: usize,
        hasher: H,
    ) -> Result<Self> {
        let max_capacity = max_capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        let capacity = capacity.clamp(MIN_CAPACITY, max_capacity);
        let stride = key_width
            .checked_add(value_width)
            .ok_or(Error::OutOfMemory { slots: capacity })?;
        let (slots, payload) = allocate(capacity, stride)?;

        trace!(
            "created table: capacity={capacity} max_capacity={max_capacity} key_width={key_width} value_width={value_width}"
        );

        Ok(Self {
            slots,
            payload,
            populated: 0,
            max_capacity,
            key_width,
            value_width,
            hasher,
        })
    }

    /// Returns the value stored for `key` as a read-only view.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the key is absent, [`Error::KeyWidth`] if `key`
    /// is not exactly [`key_width`](Self::key_width) bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// # use shift_hash::Error;
    /// #
    /// let mut table = ByteTable::new(2, 1);
    /// table.put(b"ab", b"x").unwrap();
    /// assert_eq!(table.get(b"ab"), Ok(&b"x"[..]));
    /// assert_eq!(table.get(b"zz"), Err(Error::NotFound));
    /// ```
    pub fn get(&self, key: &[u8]) -> Result<&[u8]> {
        self.check_key(key)?;
        match self.probe(self.hasher.hash_bytes(key), key) {
            Probe::Found(index) => Ok(self.value_at(index)),
            Probe::Vacant(_) | Probe::Cycled => Err(Error::NotFound),
        }
    }

    /// Copies the value stored for `key` into `out`.
    ///
    /// `out` must be exactly [`value_width`](Self::value_width) bytes.
    pub fn get_copied(&self, key: &[u8], out: &mut [u8]) -> Result<()> {
        self.check_value(out)?;
        out.copy_from_slice(self.get(key)?);
        Ok(())
    }

    /// Returns `true` if `key` is present. Keys of the wrong width are never
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// #
    /// let mut table = ByteTable::new(1, 1);
    /// table.put(&[7], &[0]).unwrap();
    /// assert!(table.contains(&[7]));
    /// assert!(!table.contains(&[8]));
    /// ```
    pub fn contains(&self, key: &[u8]) -> bool {
        key.len() == self.key_width
            && matches!(
                self.probe(self.hasher.hash_bytes(key), key),
                Probe::Found(_)
            )
    }

    /// Overwrites the value of an existing key. Never inserts and never
    /// grows the table.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the key is absent, or a width error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// # use shift_hash::Error;
    /// #
    /// let mut table = ByteTable::new(1, 1);
    /// assert_eq!(table.set(&[1], &[2]), Err(Error::NotFound));
    /// assert!(table.is_empty());
    ///
    /// table.put(&[1], &[2]).unwrap();
    /// table.set(&[1], &[3]).unwrap();
    /// assert_eq!(table.get(&[1]), Ok(&[3][..]));
    /// ```
    pub fn set(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.check_key(key)?;
        self.check_value(value)?;
        match self.probe(self.hasher.hash_bytes(key), key) {
            Probe::Found(index) => {
                self.value_at_mut(index).copy_from_slice(value);
                Ok(())
            }
            Probe::Vacant(_) | Probe::Cycled => Err(Error::NotFound),
        }
    }

    /// Inserts `key` with `value`, or overwrites the value if `key` is
    /// already present.
    ///
    /// A new key that would push the load factor past [`LOAD_FACTOR`] first
    /// doubles the table. Updates of existing keys never grow it.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExhausted`] if the table is at its capacity ceiling
    ///   and has no room for another key. The table is left unchanged.
    /// - [`Error::OutOfMemory`] if the grown slot array cannot be allocated.
    ///   The table is left unchanged.
    /// - A width error if `key` or `value` has the wrong length.
    ///
    /// # Panics
    ///
    /// If a probe visits every slot without finding the key or an empty
    /// slot, which the load factor bound rules out.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.check_key(key)?;
        self.check_value(value)?;

        let hash = self.hasher.hash_bytes(key);
        let index = match self.probe(hash, key) {
            Probe::Found(index) => {
                self.value_at_mut(index).copy_from_slice(value);
                return Ok(());
            }
            Probe::Vacant(index) if self.populated < target_load_factor(self.capacity()) => index,
            Probe::Vacant(_) => {
                self.grow_to_fit(self.populated + 1)?;
                self.vacant_index(hash)
            }
            Probe::Cycled => {
                unreachable!("probe cycled through a full table of {}", self.capacity())
            }
        };

        self.slots[index] = Slot::Occupied { hash };
        let stride = self.stride();
        let entry = &mut self.payload[index * stride..][..stride];
        entry[..self.key_width].copy_from_slice(key);
        entry[self.key_width..].copy_from_slice(value);
        self.populated += 1;

        debug_assert!(self.populated <= target_load_factor(self.capacity()));
        Ok(())
    }

    /// Removes `key` and its value.
    ///
    /// Entries later in the same probe run are shifted back into the freed
    /// slot where that keeps them reachable from their home slot, so no
    /// tombstone is left behind.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the key is absent, or a width error. The table
    /// is unchanged in either case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// # use shift_hash::Error;
    /// #
    /// let mut table = ByteTable::new(1, 1);
    /// table.put(&[1], &[1]).unwrap();
    /// assert_eq!(table.remove(&[1]), Ok(()));
    /// assert_eq!(table.remove(&[1]), Err(Error::NotFound));
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, key: &[u8]) -> Result<()> {
        self.check_key(key)?;
        let index = match self.probe(self.hasher.hash_bytes(key), key) {
            Probe::Found(index) => index,
            Probe::Vacant(_) | Probe::Cycled => return Err(Error::NotFound),
        };

        self.slots[index] = Slot::Empty;
        self.populated -= 1;
        self.shift_back(index);
        Ok(())
    }

    /// Closes the gap left at `gap` by walking the run that follows it.
    ///
    /// An entry at `next` whose home is `home` may move into the gap only if
    /// the gap lies on its probe path `home..=next`, i.e. the gap is no
    /// further from `next` than `home` is. Entries that may not move stay
    /// put and the walk continues past them; the walk ends at the first
    /// empty slot. The gap itself is always empty, so the walk terminates.
    fn shift_back(&mut self, mut gap: usize) {
        let capacity = self.capacity();
        let stride = self.stride();
        let mut next = (gap + 1) % capacity;

        while let Slot::Occupied { hash } = self.slots[next] {
            let home = home_index(hash, capacity);
            if displacement(home, next, capacity) >= displacement(gap, next, capacity) {
                self.slots[gap] = self.slots[next];
                self.slots[next] = Slot::Empty;
                self.payload
                    .copy_within(next * stride..(next + 1) * stride, gap * stride);
                gap = next;
            }
            next = (next + 1) % capacity;
        }
    }

    /// Grows the table until `additional` more keys fit under the load
    /// factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// #
    /// let mut table = ByteTable::new(4, 4);
    /// table.reserve(100).unwrap();
    /// assert!(table.capacity() * 3 / 4 >= 100);
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.grow_to_fit(self.populated.saturating_add(additional))
    }

    fn check_key(&self, key: &[u8]) -> Result<()> {
        if key.len() != self.key_width {
            return Err(Error::KeyWidth {
                expected: self.key_width,
                actual: key.len(),
            });
        }
        Ok(())
    }

    fn check_value(&self, value: &[u8]) -> Result<()> {
        if value.len() != self.value_width {
            return Err(Error::ValueWidth {
                expected: self.value_width,
                actual: value.len(),
            });
        }
        Ok(())
    }

    /// Walks forward from the home slot of `hash` until the key or an empty
    /// slot turns up, giving up after one full cycle.
    fn probe(&self, hash: u64, key: &[u8]) -> Probe {
        let capacity = self.capacity();
        let mut index = home_index(hash, capacity);

        for _ in 0..capacity {
            match self.slots[index] {
                Slot::Empty => return Probe::Vacant(index),
                Slot::Occupied { hash: stored } => {
                    if stored == hash && self.key_at(index) == key {
                        return Probe::Found(index);
                    }
                }
            }
            index = (index + 1) % capacity;
        }

        Probe::Cycled
    }

    /// First empty slot on the probe path of `hash`, for keys known to be
    /// absent.
    fn vacant_index(&self, hash: u64) -> usize {
        let capacity = self.capacity();
        let mut index = home_index(hash, capacity);
        for _ in 0..capacity {
            if self.slots[index] == Slot::Empty {
                return index;
            }
            index = (index + 1) % capacity;
        }
        unreachable!("no empty slot in a table of {capacity}")
    }

    /// Doubles the capacity until `required` entries fit under the load
    /// factor, or reports that the ceiling has been reached.
    fn grow_to_fit(&mut self, required: usize) -> Result<()> {
        let mut capacity = self.capacity();
        while required > target_load_factor(capacity) {
            if capacity >= self.max_capacity
                || self.populated >= target_load_factor(self.max_capacity)
            {
                debug!(
                    "table exhausted: capacity={capacity} populated={} required={required}",
                    self.populated
                );
                return Err(Error::CapacityExhausted { capacity });
            }
            capacity = capacity.saturating_mul(2).min(self.max_capacity);
        }

        if capacity != self.capacity() {
            self.resize_rehash(capacity)?;
        }
        Ok(())
    }

    /// Moves every entry into a fresh array of `capacity` slots. The table
    /// is untouched if the allocation fails.
    #[cold]
    fn resize_rehash(&mut self, capacity: usize) -> Result<()> {
        let stride = self.stride();
        let (mut slots, mut payload) = allocate(capacity, stride)?;

        for (index, slot) in self.slots.iter().enumerate() {
            let Slot::Occupied { hash } = *slot else {
                continue;
            };

            let mut target = home_index(hash, capacity);
            while slots[target] != Slot::Empty {
                target = (target + 1) % capacity;
            }
            slots[target] = *slot;
            payload[target * stride..][..stride]
                .copy_from_slice(&self.payload[index * stride..][..stride]);
        }

        debug!(
            "resized table: {} -> {capacity} slots, populated={}",
            self.capacity(),
            self.populated
        );

        self.slots = slots;
        self.payload = payload;
        Ok(())
    }
}

#[cfg(feature = "stats")]
impl<H> ByteTable<H> {
    /// Collects probe displacement statistics.
    ///
    /// The displacement of an entry is how many slots past its home slot it
    /// is stored, which is one less than the number of slots a successful
    /// lookup for it examines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::ByteTable;
    /// #
    /// let mut table = ByteTable::new(1, 0);
    /// table.put(&[1], &[]).unwrap();
    ///
    /// let stats = table.stats();
    /// assert_eq!(stats.populated, 1);
    /// assert_eq!(stats.histogram.iter().sum::<usize>(), 1);
    /// ```
    pub fn stats(&self) -> TableStats {
        let capacity = self.capacity();
        let mut histogram: Vec<usize> = Vec::new();
        let mut total = 0usize;

        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { hash } = *slot {
                let distance = displacement(home_index(hash, capacity), index, capacity);
                if histogram.len() <= distance {
                    histogram.resize(distance + 1, 0);
                }
                histogram[distance] += 1;
                total += distance;
            }
        }

        TableStats {
            populated: self.populated,
            capacity,
            load_factor: self.populated as f64 / capacity as f64,
            max_displacement: histogram.len().saturating_sub(1),
            mean_displacement: if self.populated == 0 {
                0.0
            } else {
                total as f64 / self.populated as f64
            },
            total_bytes: capacity * (self.key_width + self.value_width)
                + capacity * core::mem::size_of::<Slot>(),
            histogram,
        }
    }
}

/// Probe displacement statistics for a [`ByteTable`].
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct TableStats {
    /// Number of entries in the table.
    pub populated: usize,
    /// Number of slots in the backing array.
    pub capacity: usize,
    /// `populated / capacity`.
    pub load_factor: f64,
    /// Largest distance of any entry from its home slot.
    pub max_displacement: usize,
    /// Average distance of an entry from its home slot.
    pub mean_displacement: f64,
    /// Bytes held by the slot and payload arrays.
    pub total_bytes: usize,
    /// `histogram[d]` counts entries stored `d` slots past their home.
    pub histogram: Vec<usize>,
}

#[cfg(feature = "stats")]
impl TableStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Table Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Displacement: max {} mean {:.3}",
            self.max_displacement, self.mean_displacement
        );
        println!("Total Allocated: {} bytes", self.total_bytes);

        let peak = self.histogram.iter().copied().max().unwrap_or(0).max(1);
        for (distance, &count) in self.histogram.iter().enumerate() {
            let bar = "#".repeat(count * 50 / peak);
            println!("{distance:>4} | {count:>8} {bar}");
        }
    }
}

/// An iterator over the `(key, value)` pairs of a [`ByteTable`].
///
/// Created by [`ByteTable::iter`].
pub struct Iter<'a, H> {
    table: &'a ByteTable<H>,
    index: usize,
}

impl<'a, H> Iterator for Iter<'a, H> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.slots.len() {
            let index = self.index;
            self.index += 1;
            if let Slot::Occupied { .. } = self.table.slots[index] {
                return Some((self.table.key_at(index), self.table.value_at(index)));
            }
        }
        None
    }
}
