use crate::domain::item::Item;
use crate::domain::ports::CatalogStore;
use crate::error::{Result, VendingError};
use crate::interfaces::csv::catalog_reader::CatalogReader;
use crate::interfaces::csv::catalog_writer::CatalogWriter;
use async_trait::async_trait;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A catalog persisted as a CSV file.
///
/// A missing file reads as an empty catalog. Replacing the catalog writes a
/// sibling temporary file and renames it over the original, so readers see
/// either the old or the new catalog and never a partial one.
#[derive(Debug, Clone)]
pub struct CsvCatalogStore {
    path: PathBuf,
}

impl CsvCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

#[async_trait]
impl CatalogStore for CsvCatalogStore {
    async fn fetch_all(&self) -> Result<Vec<Item>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let items = CatalogReader::new(file).items().collect::<Result<Vec<_>>>()?;
        debug!(path = %self.path.display(), count = items.len(), "catalog loaded");
        Ok(items)
    }

    async fn replace_all(&self, items: Vec<Item>) -> Result<()> {
        let staging = NamedTempFile::new_in(self.parent_dir())?;
        {
            let mut writer = CatalogWriter::new(BufWriter::new(staging.as_file()));
            writer.write_items(&items)?;
        }
        staging.as_file().sync_all()?;
        staging
            .persist(&self.path)
            .map_err(|e| VendingError::IoError(e.error))?;

        debug!(path = %self.path.display(), count = items.len(), "catalog replaced");
        Ok(())
    }
}
