//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: `get`, `list` and `delete` come for free on
//! top of the wrapped `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Buyer { id: u32 }
/// #[derive(Debug)] struct BuyerCreate;
/// #[derive(Debug)] struct BuyerUpdate;
/// #[derive(Debug)] enum BuyerAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct BuyerError(String);
///
/// impl From<String> for BuyerError {
///     fn from(s: String) -> Self { BuyerError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Buyer {
///     type Id = u32;
///     type Create = BuyerCreate;
///     type Update = BuyerUpdate;
///     type Action = BuyerAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = BuyerError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(id: u32, _: BuyerCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: BuyerUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: BuyerAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct BuyerClient {
///     inner: ResourceClient<Buyer>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Buyer> for BuyerClient {
///     type Error = BuyerError;
///
///     fn inner(&self) -> &ResourceClient<Buyer> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         BuyerError(e.to_string())
///     }
/// }
///
/// async fn usage(client: BuyerClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every stored entity, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
