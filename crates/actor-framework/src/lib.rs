//! # Actor Framework
//!
//! Building blocks for type-safe resource stores on top of Tokio. Each store is an actor that
//! exclusively owns its entities and processes requests one at a time; callers talk to it
//! through a cloneable, typed client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the business rules of one resource type.
//! 2. **Runtime Layer** ([`ResourceActor`]): message loop and store ownership.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed request/response API.
//!
//! Beyond CRUD, a store supports custom [`ActorEntity::Action`]s and **transactions**: an
//! ordered list of actions applied to staged copies and committed all-or-nothing. Because the
//! actor is the only writer of its store, a transaction is atomic with respect to every other
//! request to that store.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when an actor is started, not when it is built:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32, stock: u32 }
//! #[derive(Debug)] struct ItemCreate { stock: u32 }
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug)] enum ItemAction { Take(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("not enough")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate; type Action = ItemAction;
//!     type ActionResult = u32; type Context = (); type Error = ItemError;
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(id: u32, p: ItemCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, stock: p.stock })
//!     }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: ItemAction, _: &()) -> Result<u32, Self::Error> {
//!         let ItemAction::Take(n) = a;
//!         self.stock = self.stock.checked_sub(n).ok_or(ItemError)?;
//!         Ok(self.stock)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, items) = ResourceActor::<Item>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let a = items.create(ItemCreate { stock: 5 }).await.unwrap();
//!     let b = items.create(ItemCreate { stock: 1 }).await.unwrap();
//!
//!     // The second step fails, so neither item changes.
//!     let result = items.transact(vec![(a, ItemAction::Take(3)), (b, ItemAction::Take(2))]).await;
//!     assert!(result.is_err());
//!     assert_eq!(items.get(a).await.unwrap().unwrap().stock, 5);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - No shared mutable state between actors
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so code
//! that depends on other stores can be tested without spawning them.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
