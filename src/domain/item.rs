use crate::error::VendingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The price of a catalog item.
///
/// Wraps `rust_decimal::Decimal` so currency never passes through binary
/// floating point, and rejects negative amounts at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> Result<Self, VendingError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(VendingError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = VendingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A purchasable item in the catalog.
///
/// Items have no identifier of their own; callers address them by their
/// 1-based position in the catalog.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    pub name: String,
    pub price: Price,
    pub inventory: u32,
}

/// Raw persisted shape, validated into an `Item` on deserialization.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    inventory: u32,
}

impl TryFrom<ItemRecord> for Item {
    type Error = VendingError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, Price::new(record.price)?, record.inventory)
    }
}

impl Item {
    pub fn new(name: impl Into<String>, price: Price, inventory: u32) -> Result<Self, VendingError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VendingError::ValidationError(
                "Item name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            price,
            inventory,
        })
    }

    pub fn is_available(&self) -> bool {
        self.inventory > 0
    }

    /// Removes one unit from stock.
    pub fn dispense(&mut self) -> Result<(), VendingError> {
        match self.inventory.checked_sub(1) {
            Some(remaining) => {
                self.inventory = remaining;
                Ok(())
            }
            None => Err(VendingError::UnavailableInventory(self.name.clone())),
        }
    }
}
