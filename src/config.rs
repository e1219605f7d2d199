use crate::error::Result;
use crate::hash_table::ByteTable;
use crate::hash_table::MAX_CAPACITY;
use crate::hash_table::MIN_CAPACITY;
use crate::hasher::ByteHasher;
use crate::hasher::DefaultByteHasher;

/// Creation parameters for a [`ByteTable`].
///
/// Defaults: [`MIN_CAPACITY`] slots, 8-byte keys and values, the default
/// hasher, and [`MAX_CAPACITY`] as the growth ceiling.
///
/// # Examples
///
/// ```rust
/// use shift_hash::Djb2;
/// use shift_hash::TableBuilder;
///
/// let table = TableBuilder::new()
///     .capacity(64)
///     .key_width(16)
///     .value_width(4)
///     .max_capacity(1024)
///     .hasher(Djb2)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.capacity(), 64);
/// assert_eq!(table.max_capacity(), 1024);
/// assert_eq!(table.key_width(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder<H = DefaultByteHasher> {
    capacity: usize,
    max_capacity: usize,
    key_width: usize,
    value_width: usize,
    hasher: H,
}

impl Default for TableBuilder<DefaultByteHasher> {
    fn default() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            max_capacity: MAX_CAPACITY,
            key_width: 8,
            value_width: 8,
            hasher: DefaultByteHasher::default(),
        }
    }
}

impl TableBuilder<DefaultByteHasher> {
    /// Creates a builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> TableBuilder<H> {
    /// Sets the initial slot count. Clamped to `[MIN_CAPACITY,
    /// max_capacity]` at build time.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the slot count the table will never grow past. Clamped to
    /// `[MIN_CAPACITY, MAX_CAPACITY]` at build time.
    pub fn max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the fixed key width in bytes.
    pub fn key_width(mut self, key_width: usize) -> Self {
        self.key_width = key_width;
        self
    }

    /// Sets the fixed value width in bytes.
    pub fn value_width(mut self, value_width: usize) -> Self {
        self.value_width = value_width;
        self
    }

    /// Replaces the hasher.
    pub fn hasher<T: ByteHasher>(self, hasher: T) -> TableBuilder<T> {
        TableBuilder {
            capacity: self.capacity,
            max_capacity: self.max_capacity,
            key_width: self.key_width,
            value_width: self.value_width,
            hasher,
        }
    }
}

impl<H> TableBuilder<H>
where
    H: ByteHasher,
{
    /// Allocates the table.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the slot array
    /// cannot be allocated.
    pub fn build(self) -> Result<ByteTable<H>> {
        ByteTable::build(
            self.capacity,
            self.max_capacity,
            self.key_width,
            self.value_width,
            self.hasher,
        )
    }
}
