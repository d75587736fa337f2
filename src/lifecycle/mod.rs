//! # System Lifecycle
//!
//! Starting, wiring and stopping the three store actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when started:
//!
//! - `User`, `Product`: `Context = ()`
//! - `Order`: `Context = OrderContext { users, products, reservation }`
//!
//! The dependency graph is acyclic, so dropping every client shuts the system down: the order
//! actor exits first and releases its clones of the user and product clients.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the global subscriber. See the [`tracing`] module.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::*;
