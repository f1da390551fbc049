use clap::{Parser, Subcommand};
use miette::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;
use vending::application::vending::VendingService;
use vending::domain::money::to_pennies;
use vending::domain::ports::CatalogStoreBox;
use vending::infrastructure::csv_file::CsvCatalogStore;
use vending::telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// CSV file holding the item catalog
    #[arg(long, env = "VENDING_CATALOG", default_value = "catalog.csv")]
    catalog: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "VENDING_DB_PATH")]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every item with its price and remaining stock
    List,
    /// Buy an item by its number in the list
    Buy {
        /// Item number as shown by `list`
        #[arg(allow_negative_numbers = true)]
        selector: i64,
        /// Money inserted, e.g. 1.50
        #[arg(allow_negative_numbers = true)]
        money: Decimal,
    },
    /// Break an amount of pennies into coins
    Change {
        #[arg(allow_negative_numbers = true)]
        pennies: i64,
    },
}

fn open_store(catalog: PathBuf, db_path: Option<PathBuf>) -> Result<CatalogStoreBox> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(db_path) => {
            let store = vending::infrastructure::rocksdb::RocksDBStore::open(db_path)?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(db_path) => {
            tracing::warn!(
                db_path = %db_path.display(),
                "persistent storage requested but the 'storage-rocksdb' feature is not enabled, falling back to the CSV catalog"
            );
            Ok(Box::new(CsvCatalogStore::new(catalog)))
        }
        None => Ok(Box::new(CsvCatalogStore::new(catalog))),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let service = VendingService::new(open_store(cli.catalog, cli.db_path)?);

    match cli.command {
        Command::List => print!("{}", service.list_items().await?),
        Command::Buy { selector, money } => {
            let change = service.purchase(selector, money).await?;
            println!("Change: {change}");
            println!("{}", service.calculate_change(to_pennies(change)?)?);
        }
        Command::Change { pennies } => println!("{}", service.calculate_change(pennies)?),
    }

    Ok(())
}
