//! Custom actions for the Product actor.
//!
//! Stock is only ever changed through these actions, never through a plain update, so every
//! decrement goes through the availability check in
//! [`handle_action`](actor_framework::ActorEntity::handle_action).

use crate::model::ProductId;
use rust_decimal::Decimal;

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes `u32` units out of stock.
    ///
    /// # Errors
    /// Fails with `InsufficientStock` if the amount exceeds the available stock.
    ReserveStock(u32),
}

/// Results from ProductActions; variants match 1:1 with [`ProductAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(u32),
    ReserveStock(StockReceipt),
}

/// What a successful reservation hands back to the caller.
///
/// Carries the product's name and unit price as they were at reservation time, which is what
/// an order line records.
#[derive(Debug, Clone, PartialEq)]
pub struct StockReceipt {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    /// Stock left after the reservation.
    pub remaining: u32,
}
