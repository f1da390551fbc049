use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum VendingError {
    #[error("Selection {selector} is out of bounds (catalog has {size} items)")]
    #[diagnostic(
        code(vending::out_of_bounds),
        help("pick a number shown by the `list` command")
    )]
    OutOfBounds { selector: i64, size: usize },

    #[error("Insufficient funds: {item} costs {price}, inserted {inserted}")]
    #[diagnostic(code(vending::insufficient_funds), help("insert more money"))]
    InsufficientFunds {
        item: String,
        price: Decimal,
        inserted: Decimal,
    },

    #[error("{0} is sold out")]
    #[diagnostic(code(vending::unavailable_inventory))]
    UnavailableInventory(String),

    #[error("Invalid argument: {0}")]
    #[diagnostic(code(vending::invalid_argument))]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    #[diagnostic(code(vending::validation))]
    ValidationError(String),

    #[error("CSV error: {0}")]
    #[diagnostic(code(vending::csv))]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(vending::io))]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    #[diagnostic(code(vending::rocksdb))]
    RocksDbError(#[from] rocksdb::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(vending::internal))]
    InternalError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, VendingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages() {
        let err = VendingError::OutOfBounds {
            selector: 7,
            size: 3,
        };
        assert_eq!(
            err.to_string(),
            "Selection 7 is out of bounds (catalog has 3 items)"
        );

        let err = VendingError::InsufficientFunds {
            item: "Chips".to_string(),
            price: dec!(1.25),
            inserted: dec!(1.00),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: Chips costs 1.25, inserted 1.00"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = VendingError::UnavailableInventory("Gum".to_string());
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("vending::unavailable_inventory"));
    }
}
