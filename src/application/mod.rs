//! Application layer containing the vending transaction logic.
//!
//! This module defines the `VendingService`, the entry point for listing the
//! catalog, buying items and breaking change into coins. It depends only on
//! the `CatalogStore` port, so any store implementation can back it.

pub mod vending;
