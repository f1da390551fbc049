//! Catalog store implementations.

pub mod csv_file;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
