use thiserror::Error;

/// Result alias used by every fallible table operation.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by [`ByteTable`](crate::ByteTable) and its typed wrappers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The slot array for `slots` entries could not be allocated.
    #[error("failed to allocate a slot array of {slots} slots")]
    OutOfMemory {
        /// Number of slots that were requested.
        slots: usize,
    },
    /// The table is at its capacity ceiling and cannot accept another key
    /// without exceeding the load factor.
    #[error("table cannot grow past {capacity} slots")]
    CapacityExhausted {
        /// Capacity of the table when growth was refused.
        capacity: usize,
    },
    /// The key is not present in the table.
    #[error("key not found")]
    NotFound,
    /// A key did not match the table's declared key width.
    #[error("key is {actual} bytes, table expects {expected}")]
    KeyWidth {
        /// Declared key width.
        expected: usize,
        /// Width of the key that was passed.
        actual: usize,
    },
    /// A value did not match the table's declared value width.
    #[error("value is {actual} bytes, table expects {expected}")]
    ValueWidth {
        /// Declared value width.
        expected: usize,
        /// Width of the value that was passed.
        actual: usize,
    },
}

impl Error {
    /// Returns `true` for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
