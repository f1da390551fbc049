use crate::domain::change::CoinBreakdown;
use crate::domain::money::round;
use crate::domain::ports::CatalogStoreBox;
use crate::error::{Result, VendingError};
use rust_decimal::Decimal;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Transaction logic of the vending machine.
///
/// `VendingService` re-reads the catalog from its store on every call, so the
/// store stays the source of truth. Purchases hold an internal lock across
/// the read, decrement and write so concurrent buyers of the last unit cannot
/// both succeed.
pub struct VendingService {
    store: CatalogStoreBox,
    purchase_lock: Mutex<()>,
}

impl VendingService {
    /// Creates a new `VendingService` backed by `store`.
    pub fn new(store: CatalogStoreBox) -> Self {
        Self {
            store,
            purchase_lock: Mutex::new(()),
        }
    }

    /// Renders the catalog, one numbered block per item.
    ///
    /// An empty catalog yields an empty string.
    pub async fn list_items(&self) -> Result<String> {
        let items = self.store.fetch_all().await?;
        let report: String = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                format!(
                    "{}. {}\nPrice: {}\nInventory: {}\n",
                    index + 1,
                    item.name,
                    item.price,
                    item.inventory
                )
            })
            .collect();
        Ok(report)
    }

    /// Buys the item at the 1-based `selector` and returns the change owed.
    ///
    /// Checks run in a fixed order: selector bounds, then funds, then stock.
    /// The catalog is written back only when every check passes.
    #[tracing::instrument(skip(self))]
    pub async fn purchase(&self, selector: i64, inserted: Decimal) -> Result<Decimal> {
        let _guard = self.purchase_lock.lock().await;

        let mut items = self.store.fetch_all().await?;
        let size = items.len();
        let index = usize::try_from(selector)
            .ok()
            .filter(|position| (1..=size).contains(position))
            .map(|position| position - 1)
            .ok_or(VendingError::OutOfBounds { selector, size })?;

        let item = &mut items[index];
        let price = item.price.value();
        if inserted < price {
            debug!(item = %item.name, %price, "rejected: insufficient funds");
            return Err(VendingError::InsufficientFunds {
                item: item.name.clone(),
                price,
                inserted,
            });
        }
        item.dispense()?;

        let change = round(inserted - price, 2)?;
        info!(item = %item.name, remaining = item.inventory, %change, "item dispensed");

        self.store.replace_all(items).await?;
        Ok(change)
    }

    /// Describes `amount` pennies as quarters, dimes, nickels and pennies.
    pub fn calculate_change(&self, amount: i64) -> Result<String> {
        CoinBreakdown::from_pennies(amount).map(|breakdown| breakdown.to_string())
    }
}
