//! Typed wrappers around each store's `ResourceClient`.
//!
//! Each client recovers its actor's own error type from `FrameworkError::EntityError`, so callers
//! match on `ProductError::InsufficientStock` rather than on a boxed error.

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
