#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A typed map over fixed-size byte arrays.
///
/// This module provides an `ArrayMap` that wraps the `ByteTable` with
/// `[u8; K]` keys and `[u8; V]` values.
pub mod array_map;

/// A typed set over fixed-size byte arrays.
pub mod array_set;

/// Builder for configuring a `ByteTable` before allocation.
pub mod config;

/// Error taxonomy shared by every table operation.
pub mod error;

pub mod hash_table;

/// Pluggable byte hashers.
pub mod hasher;

pub use array_map::ArrayMap;
pub use array_set::ArraySet;
pub use config::TableBuilder;
pub use error::Error;
pub use error::Result;
pub use hash_table::ByteTable;
pub use hash_table::LOAD_FACTOR;
pub use hash_table::MAX_CAPACITY;
pub use hash_table::MIN_CAPACITY;
#[cfg(feature = "stats")]
pub use hash_table::TableStats;
pub use hasher::BuildHasherBytes;
pub use hasher::ByteHasher;
pub use hasher::DefaultByteHasher;
pub use hasher::Djb2;
