//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` and exposes the stock actions with typed results.
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, StockReceipt};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn receipt(result: ProductActionResult) -> Result<StockReceipt, ProductError> {
    match result {
        ProductActionResult::ReserveStock(receipt) => Ok(receipt),
        other => Err(ProductError::ActorCommunicationError(format!(
            "ReserveStock answered with {other:?}"
        ))),
    }
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Current stock level of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(ProductError::ActorCommunicationError(format!(
                "CheckStock answered with {other:?}"
            ))),
        }
    }

    /// Takes `quantity` units of one product out of stock.
    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: ProductId,
        quantity: u32,
    ) -> Result<StockReceipt, ProductError> {
        debug!("Reserving stock");
        let result = self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)?;
        receipt(result)
    }

    /// Reserves every `(product, quantity)` pair, in order, as one all-or-nothing unit.
    ///
    /// On error no product's stock has changed. Receipts come back in request order.
    #[instrument(skip(self))]
    pub async fn reserve_all(
        &self,
        items: Vec<(ProductId, u32)>,
    ) -> Result<Vec<StockReceipt>, ProductError> {
        debug!(lines = items.len(), "Reserving stock atomically");
        let ops = items
            .into_iter()
            .map(|(id, quantity)| (id, ProductAction::ReserveStock(quantity)))
            .collect();
        self.inner
            .transact(ops)
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .map(receipt)
            .collect()
    }
}
