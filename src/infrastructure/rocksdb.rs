use crate::domain::item::Item;
use crate::domain::ports::CatalogStore;
use crate::error::{Result, VendingError};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Column Family holding the catalog.
pub const CF_CATALOG: &str = "catalog";
/// Key under which the whole catalog is stored as one JSON array.
const CATALOG_KEY: &[u8] = b"items";

/// A persistent catalog store backed by RocksDB.
///
/// The whole catalog lives in a single value, so `replace_all` is one `put`
/// and therefore atomic.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "catalog" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_catalog = ColumnFamilyDescriptor::new(CF_CATALOG, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_catalog])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn catalog_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_CATALOG).ok_or_else(|| {
            VendingError::InternalError(Box::new(std::io::Error::other(
                "Catalog column family not found",
            )))
        })
    }
}

#[async_trait]
impl CatalogStore for RocksDBStore {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        let cf = self.catalog_cf()?;

        match self.db.get_cf(cf, CATALOG_KEY)? {
            Some(bytes) => {
                let items: Vec<Item> = serde_json::from_slice(&bytes).map_err(|e| {
                    VendingError::InternalError(Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Deserialization error: {}", e),
                    )))
                })?;
                debug!(count = items.len(), "catalog loaded from rocksdb");
                Ok(items)
            }
            None => Ok(Vec::new()),
        }
    }

    async fn replace_all(&self, items: Vec<Item>) -> Result<()> {
        let cf = self.catalog_cf()?;

        let value = serde_json::to_vec(&items).map_err(|e| {
            VendingError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;
        self.db.put_cf(cf, CATALOG_KEY, value)?;

        debug!(count = items.len(), "catalog replaced in rocksdb");
        Ok(())
    }
}
