use super::item::Item;
use crate::error::Result;
use async_trait::async_trait;

/// Persistence for the ordered item catalog.
///
/// The catalog is read and written as a whole. Order is significant: it
/// defines the 1-based selectors callers use.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns a snapshot of the current catalog in order.
    async fn fetch_all(&self) -> Result<Vec<Item>>;
    /// Atomically replaces the entire catalog.
    async fn replace_all(&self, items: Vec<Item>) -> Result<()>;
}

pub type CatalogStoreBox = Box<dyn CatalogStore>;
