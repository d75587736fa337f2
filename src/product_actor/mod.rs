//! # Product Actor
//!
//! Catalogue and inventory. Beyond CRUD the store answers two custom actions:
//!
//! ```rust,ignore
//! // Read the current stock level
//! let stock = product_client.check_stock(product_id).await?;
//!
//! // Take units out of stock for an order (can fail)
//! let receipt = product_client.reserve_stock(product_id, quantity).await?;
//!
//! // Several reservations as one all-or-nothing unit
//! let receipts = product_client.reserve_all(vec![(a, 2), (b, 1)]).await?;
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`], [`ProductActionResult`] and [`StockReceipt`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::{next_free_id, Product};
use actor_framework::ResourceActor;

/// Creates a Product actor holding `existing`, and its client.
///
/// New products are numbered after the highest existing id.
pub fn new(buffer: usize, existing: Vec<Product>) -> (ResourceActor<Product>, ProductClient) {
    let next_id = next_free_id(existing.iter().map(|p| p.id.0));
    let (actor, generic_client) = ResourceActor::seeded(buffer, existing, next_id);
    (actor, ProductClient::new(generic_client))
}
