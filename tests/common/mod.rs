#![allow(dead_code)]

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vending::domain::item::{Item, Price};
use vending::domain::ports::CatalogStore;
use vending::error::Result;
use vending::infrastructure::in_memory::InMemoryCatalogStore;

pub fn item(name: &str, price: Decimal, inventory: u32) -> Item {
    Item::new(name, Price::new(price).unwrap(), inventory).unwrap()
}

pub fn sample_items() -> Vec<Item> {
    vec![
        item("Chips", dec!(1.25), 3),
        item("Soda", dec!(1.50), 0),
        item("Candy Bar", dec!(0.85), 7),
        item("Gum", dec!(0.35), 12),
    ]
}

/// Copies the fixture catalog into `dir` so a test can mutate it freely.
pub fn copy_fixture_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.csv");
    std::fs::copy("tests/fixtures/catalog.csv", &path).unwrap();
    path
}

/// Wraps an in-memory catalog and counts calls to each port method.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: InMemoryCatalogStore,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            inner: InMemoryCatalogStore::with_items(items),
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Current catalog, read without being counted.
    pub async fn snapshot(&self) -> Vec<Item> {
        self.inner.fetch_all().await.unwrap()
    }
}

#[async_trait]
impl CatalogStore for RecordingStore {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_all().await
    }

    async fn replace_all(&self, items: Vec<Item>) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.replace_all(items).await
    }
}
