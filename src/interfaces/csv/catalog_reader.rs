use crate::domain::item::Item;
use crate::error::{Result, VendingError};
use std::io::Read;

/// Reads catalog items from a CSV source with a `name,price,inventory` header.
///
/// Wraps `csv::Reader` and yields items in file order, which is the order
/// selectors refer to.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` over any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates items.
    pub fn items(self) -> impl Iterator<Item = Result<Item>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }
}
