//! # User Actor
//!
//! The simplest store in the system: no dependencies (`Context = ()`) and no custom actions.
//! Orders and products only ever ask it whether a buyer exists.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::model::UserCreate;
//! use storefront::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32, Vec::new());
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_user(UserCreate::new("alice", "alice@example.com"))
//!         .await?;
//!     assert_eq!(id.to_string(), "user_1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::{next_free_id, User};
use actor_framework::ResourceActor;

/// Creates a User actor holding `existing`, and its client.
pub fn new(buffer: usize, existing: Vec<User>) -> (ResourceActor<User>, UserClient) {
    let next_id = next_free_id(existing.iter().map(|u| u.id.0));
    let (actor, generic_client) = ResourceActor::seeded(buffer, existing, next_id);
    (actor, UserClient::new(generic_client))
}
