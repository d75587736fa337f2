//! [`ActorEntity`] implementation for [`Order`], including order placement.
//!
//! `from_create_params` checks the shape of the request; `on_create` resolves every requested
//! item against the product store before the order is stored:
//!
//! 1. the buyer must exist in the user store
//! 2. each item's product is looked up and its stock reserved, in the order supplied
//! 3. each reservation becomes an [`OrderLine`] carrying the product's name and unit price
//! 4. the total is the sum of line subtotals and the order starts as `pending`
//!
//! Any failure discards the order. Whether earlier reservations survive a later failure depends
//! on the [`ReservationMode`].

use super::error::OrderError;
use super::{OrderContext, ReservationMode};
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderId, OrderLine, OrderUpdate, ProductId, RequestedItem};
use crate::product_actor::{ProductError, StockReceipt};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

/// Stands in for a reference that cannot name any product. Ids start at 1, so the product
/// store reports it missing at the item's own position in a transaction.
const UNKNOWN_PRODUCT: ProductId = ProductId(0);

/// The product an item names, or `ProductNotFound` carrying the reference as supplied.
fn resolve(item: &RequestedItem) -> Result<ProductId, OrderError> {
    item.product_ref
        .parse()
        .map_err(|_| OrderError::ProductNotFound(item.product_ref.clone()))
}

/// Maps a product failure for `item` back to the caller's own spelling of the product.
fn for_item(e: ProductError, item: &RequestedItem) -> OrderError {
    match e {
        ProductError::NotFound(_) => OrderError::ProductNotFound(item.product_ref.clone()),
        other => other.into(),
    }
}

async fn reserve_atomic(
    products: &ProductClient,
    items: &[RequestedItem],
) -> Result<Vec<StockReceipt>, OrderError> {
    let ids: Vec<ProductId> = items
        .iter()
        .map(|item| item.product_ref.parse().unwrap_or(UNKNOWN_PRODUCT))
        .collect();
    let ops = ids.iter().copied().zip(items.iter().map(|i| i.quantity)).collect();

    products.reserve_all(ops).await.map_err(|e| match e {
        ProductError::NotFound(shown) => {
            let supplied = ids
                .iter()
                .zip(items)
                .find(|(id, _)| id.to_string() == shown)
                .map_or(shown, |(_, item)| item.product_ref.clone());
            OrderError::ProductNotFound(supplied)
        }
        other => other.into(),
    })
}

async fn reserve_per_item(
    order: OrderId,
    products: &ProductClient,
    items: &[RequestedItem],
) -> Result<Vec<StockReceipt>, OrderError> {
    let mut receipts = Vec::with_capacity(items.len());
    for item in items {
        let reserved = match resolve(item) {
            Ok(id) => products
                .reserve_stock(id, item.quantity)
                .await
                .map_err(|e| for_item(e, item)),
            Err(e) => Err(e),
        };
        match reserved {
            Ok(receipt) => receipts.push(receipt),
            Err(e) => {
                if !receipts.is_empty() {
                    warn!(
                        order_id = %order,
                        kept = receipts.len(),
                        error = %e,
                        "Order rejected after partial stock reservation"
                    );
                }
                return Err(e);
            }
        }
    }
    Ok(receipts)
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> OrderId {
        self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "order must contain at least one item".into(),
            ));
        }
        for item in &params.items {
            if item.product_ref.trim().is_empty() {
                return Err(OrderError::ValidationError("productId is required".into()));
            }
            if item.quantity == 0 {
                return Err(OrderError::ValidationError(format!(
                    "quantity for {} must be at least 1",
                    item.product_ref
                )));
            }
        }
        Ok(Order::pending(id, params, Utc::now()))
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        debug!(order_id = %self.id, user_id = %self.user_id, "Placing order");
        if ctx.users.get(self.user_id).await?.is_none() {
            return Err(OrderError::UnknownBuyer(self.user_id.to_string()));
        }

        let items = std::mem::take(&mut self.requested);
        let receipts = match ctx.reservation {
            ReservationMode::Atomic => reserve_atomic(&ctx.products, &items).await?,
            ReservationMode::PerItem => reserve_per_item(self.id, &ctx.products, &items).await?,
        };

        self.lines = receipts
            .into_iter()
            .zip(&items)
            .map(|(receipt, item)| OrderLine {
                product_id: receipt.product_id,
                name: receipt.name,
                quantity: item.quantity,
                price: receipt.unit_price,
            })
            .collect();
        self.total_amount = Order::total_of(&self.lines).ok_or_else(|| {
            OrderError::ValidationError("order total is out of range".into())
        })?;
        Ok(())
    }

    /// Moves the order forward through its fulfilment states. Going back is refused.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        if update.status < self.status {
            return Err(OrderError::ValidationError(format!(
                "cannot move order from {:?} back to {:?}",
                self.status, update.status
            )));
        }
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }
}
