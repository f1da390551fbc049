//! Domain model: catalog items, coin denominations and the store port.

pub mod change;
pub mod item;
pub mod money;
pub mod ports;
