//! # Order Actor
//!
//! Stores orders. Its `on_create` hook is where an order is placed: it depends on the user and
//! product stores, which are injected through [`OrderContext`] when the actor is started.
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32, Vec::new());
//! tokio::spawn(order_actor.run(OrderContext {
//!     users: user_client.clone(),
//!     products: product_client.clone(),
//!     reservation: ReservationMode::Atomic,
//! }));
//! ```
//!
//! See [`entity`] for the placement flow.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::model::{next_free_id, Order};
use actor_framework::ResourceActor;
use serde::{Deserialize, Serialize};

/// How the stock of a multi-item order is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationMode {
    /// All items are reserved in one product-store transaction; a failing item leaves every
    /// product's stock untouched.
    #[default]
    Atomic,
    /// Each item is reserved with its own request. A failing item rejects the order but the
    /// items reserved before it stay decremented.
    PerItem,
}

/// Dependencies of the Order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub users: UserClient,
    pub products: ProductClient,
    pub reservation: ReservationMode,
}

/// Creates an Order actor holding `existing`, and its client.
pub fn new(buffer: usize, existing: Vec<Order>) -> (ResourceActor<Order>, OrderClient) {
    let next_id = next_free_id(existing.iter().map(|o| o.id.0));
    let (actor, generic_client) = ResourceActor::seeded(buffer, existing, next_id);
    (actor, OrderClient::new(generic_client))
}
