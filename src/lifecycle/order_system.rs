use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::config::StoreConfig;
use crate::order_actor::OrderContext;
use crate::persistence::Snapshot;
use actor_framework::ActorClient;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
    #[error("Failed to read {store} store: {reason}")]
    Snapshot { store: &'static str, reason: String },
}

fn unreadable(store: &'static str, e: impl std::fmt::Display) -> LifecycleError {
    LifecycleError::Snapshot {
        store,
        reason: e.to_string(),
    }
}

/// The runtime orchestrator for the storefront's actors.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the user, product and order actors
/// - **Dependency Wiring**: the order actor receives the user and product clients
/// - **Seeding**: restoring stores from a [`Snapshot`], with ID counters resuming after it
///
/// # Example
///
/// ```rust
/// use storefront::config::StoreConfig;
/// use storefront::lifecycle::OrderSystem;
/// use storefront::model::UserCreate;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new(&StoreConfig::default());
///     let buyer = system
///         .user_client
///         .create_user(UserCreate::new("alice", "alice@example.com"))
///         .await?;
///     assert_eq!(buyer.to_string(), "user_1");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    pub order_client: OrderClient,
    pub user_client: UserClient,
    pub product_client: ProductClient,
    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts all actors with empty stores.
    pub fn new(store: &StoreConfig) -> Self {
        Self::from_snapshot(store, Snapshot::default())
    }

    /// Starts all actors, each seeded with its part of `snapshot`.
    pub fn from_snapshot(store: &StoreConfig, snapshot: Snapshot) -> Self {
        let buffer = store.channel_buffer;

        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new(buffer, snapshot.users);
        let (product_actor, product_client) =
            crate::product_actor::new(buffer, snapshot.products);
        let (order_actor, order_client) = crate::order_actor::new(buffer, snapshot.orders);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            users: user_client.clone(),
            products: product_client.clone(),
            reservation: store.reservation,
        }));

        info!(reservation = ?store.reservation, "Order system started");
        Self {
            order_client,
            user_client,
            product_client,
            handles: vec![user_handle, product_handle, order_handle],
        }
    }

    /// Reads every store into a [`Snapshot`].
    pub async fn snapshot(&self) -> Result<Snapshot, LifecycleError> {
        Ok(Snapshot {
            users: self
                .user_client
                .list()
                .await
                .map_err(|e| unreadable("user", e))?,
            products: self
                .product_client
                .list()
                .await
                .map_err(|e| unreadable("product", e))?,
            orders: self
                .order_client
                .list()
                .await
                .map_err(|e| unreadable("order", e))?,
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains and exits. Any other
    /// clone still alive (e.g. held by the HTTP gateway) keeps its actor running, so drop those
    /// first.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(LifecycleError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
