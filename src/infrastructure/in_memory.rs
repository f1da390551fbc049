use crate::domain::item::Item;
use crate::domain::ports::CatalogStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory catalog.
///
/// Uses `Arc<RwLock<Vec<Item>>>` so clones share the same catalog, which lets
/// tests hand one clone to a service and inspect the other.
#[derive(Default, Clone)]
pub struct InMemoryCatalogStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryCatalogStore {
    /// Creates a new, empty in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with `items`, in order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn replace_all(&self, items: Vec<Item>) -> Result<()> {
        let mut current = self.items.write().await;
        *current = items;
        Ok(())
    }
}
