use crate::model::{ProductId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::model::entity_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// Fulfilment state of an order. Orders start as `Pending` and only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// One accepted line of an order.
///
/// `name` and `price` are copied from the product when the order is placed and are not
/// affected by later catalogue changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl OrderLine {
    /// `quantity × price`, or `None` if it does not fit a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// A requested `(product, quantity)` pair, as supplied by the caller.
///
/// The product reference is kept verbatim so that an identifier which cannot name any product
/// is reported back exactly as it was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedItem {
    pub product_ref: String,
    pub quantity: u32,
}

impl RequestedItem {
    pub fn new(product_ref: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_ref: product_ref.into(),
            quantity,
        }
    }
}

/// Represents a customer order.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor). Creating an order runs the
/// placement flow in `on_create` (see [`order_actor`](crate::order_actor)): the requested
/// items are resolved against the product store and turned into [`OrderLine`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    #[serde(rename = "products")]
    pub lines: Vec<OrderLine>,
    /// Sum of line subtotals, fixed at creation.
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    /// Items still to be resolved; drained by the placement flow and never persisted.
    #[serde(skip)]
    pub(crate) requested: Vec<RequestedItem>,
}

impl Order {
    /// A pending order with no accepted lines yet.
    pub fn pending(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: params.user_id,
            lines: Vec::new(),
            total_amount: Decimal::ZERO,
            status: OrderStatus::Pending,
            shipping_address: params.shipping_address,
            created_at,
            requested: params.items,
        }
    }

    /// Sum of `quantity × price` over `lines`; `None` on overflow.
    pub fn total_of(lines: &[OrderLine]) -> Option<Decimal> {
        lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.subtotal()?))
    }

    /// Sort order for listings: newest first, ties broken by the higher id.
    pub fn newest_first(a: &Order, b: &Order) -> Ordering {
        b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub items: Vec<RequestedItem>,
    pub shipping_address: ShippingAddress,
}

/// Payload for updating an order: the only mutable field is its status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(qty: u32, cents: i64) -> OrderLine {
        OrderLine {
            product_id: ProductId(1),
            name: "Widget".into(),
            quantity: qty,
            price: Decimal::new(cents, 2),
        }
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let lines = vec![line(3, 1000), line(2, 250)];
        assert_eq!(Order::total_of(&lines), Some(Decimal::new(3500, 2)));
        assert_eq!(Order::total_of(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn total_overflow_is_none() {
        let mut huge = line(2, 0);
        huge.price = Decimal::MAX;
        assert_eq!(huge.subtotal(), None);
        assert_eq!(Order::total_of(&[huge]), None);

        let mut max = line(1, 0);
        max.price = Decimal::MAX;
        assert_eq!(Order::total_of(&[max.clone(), max]), None);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let order = Order {
            id: OrderId(1),
            user_id: UserId(2),
            lines: vec![line(3, 1000)],
            total_amount: Decimal::new(3000, 2),
            status: OrderStatus::Pending,
            shipping_address: ShippingAddress {
                city: Some("Lyon".into()),
                ..Default::default()
            },
            created_at: Utc::now(),
            requested: vec![RequestedItem::new("product_1", 3)],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "order_1");
        assert_eq!(json["userId"], "user_2");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["totalAmount"], "30.00");
        assert_eq!(json["products"][0]["productId"], "product_1");
        assert_eq!(json["shippingAddress"]["city"], "Lyon");
        assert!(json.get("requested").is_none());
    }
}
