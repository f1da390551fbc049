use crate::domain::item::Item;
use crate::error::Result;
use std::io::Write;

/// Writes catalog items as CSV with a `name,price,inventory` header.
pub struct CatalogWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CatalogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes every item in order and flushes the underlying sink.
    ///
    /// An empty slice still produces the header row so the file reads back
    /// as an empty catalog.
    pub fn write_items(&mut self, items: &[Item]) -> Result<()> {
        if items.is_empty() {
            self.writer.write_record(["name", "price", "inventory"])?;
        }
        for item in items {
            self.writer.serialize(item)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
