//! # Storefront
//!
//! Order and inventory backend of a small shop, built from resource actors.
//!
//! Each store (users, products, orders) is a [`ResourceActor`](actor_framework::ResourceActor)
//! running in its own Tokio task and exclusively owning its entities. The HTTP gateway talks
//! to the stores only through their typed clients.
//!
//! ## Module Tour
//!
//! ### 1. The Stores ([`user_actor`], [`product_actor`], [`order_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations. Order placement lives in the
//! order entity's `on_create` hook, which reserves stock through the product store.
//!
//! ### 2. The Interface ([`clients`])
//! Typed wrappers such as [`ProductClient`](clients::ProductClient) that recover each store's
//! own error type.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) spawns the actors, wires the order store to the
//! other two, seeds them from a [`Snapshot`](persistence::Snapshot) and shuts them down.
//!
//! ### 4. The Edge ([`gateway`], [`auth`], [`config`])
//! axum routes, bearer-token verification, YAML configuration.
//!
//! ## Placing an Order
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront::config::StoreConfig;
//! use storefront::lifecycle::OrderSystem;
//! use storefront::model::{OrderCreate, ProductCreate, RequestedItem, ShippingAddress, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = OrderSystem::new(&StoreConfig::default());
//!     let buyer = system
//!         .user_client
//!         .create_user(UserCreate::new("alice", "alice@example.com"))
//!         .await?;
//!     let lamp = system
//!         .product_client
//!         .create_product(ProductCreate {
//!             name: "Lamp".into(),
//!             description: "Desk lamp".into(),
//!             category: "home".into(),
//!             price: Decimal::new(1000, 2),
//!             stock: 5,
//!             image_url: None,
//!             created_by: buyer,
//!         })
//!         .await?;
//!
//!     let order = system
//!         .order_client
//!         .place_order(OrderCreate {
//!             user_id: buyer,
//!             items: vec![RequestedItem::new(lamp.to_string(), 3)],
//!             shipping_address: ShippingAddress::default(),
//!         })
//!         .await?;
//!
//!     assert_eq!(order.total_amount, Decimal::new(3000, 2));
//!     assert_eq!(system.product_client.check_stock(lamp).await?, 2);
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod persistence;
pub mod product_actor;
pub mod user_actor;
