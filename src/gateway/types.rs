//! Request and response bodies of the HTTP API.
//!
//! Requests are checked once here, with `validator`, before anything reaches a store.

use crate::model::{
    Order, OrderCreate, Product, ProductCreate, RequestedItem, ShippingAddress, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::error::ApiError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "products must contain at least one item"),
        nested
    )]
    pub products: Vec<OrderItemRequest>,
    #[serde(default)]
    pub shipping_address: ShippingAddress,
}

/// `length` on the enclosing list requires the items to be `Serialize`.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "productId is required"))]
    pub product_id: String,
    #[validate(range(
        min = 1,
        max = 4_294_967_295_i64,
        message = "quantity must be at least 1"
    ))]
    pub quantity: i64,
}

impl CreateOrderRequest {
    /// Converts a validated request into the order store's payload.
    pub fn into_order(self, user_id: UserId) -> Result<OrderCreate, ApiError> {
        let items = self
            .products
            .into_iter()
            .map(|item| {
                u32::try_from(item.quantity)
                    .map(|quantity| RequestedItem::new(item.product_id, quantity))
                    .map_err(|_| ApiError::BadRequest("quantity is out of range".into()))
            })
            .collect::<Result<_, _>>()?;
        Ok(OrderCreate {
            user_id,
            items,
            shipping_address: self.shipping_address,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    #[validate(range(
        min = 0,
        max = 4_294_967_295_i64,
        message = "stock must not be negative"
    ))]
    pub stock: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateProductRequest {
    pub fn into_product(self, created_by: UserId) -> Result<ProductCreate, ApiError> {
        let stock = u32::try_from(self.stock)
            .map_err(|_| ApiError::BadRequest("stock is out of range".into()))?;
        Ok(ProductCreate {
            name: self.name,
            description: self.description,
            category: self.category,
            price: self.price,
            stock,
            image_url: self.image_url,
            created_by,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub message: &'static str,
    pub order: Order,
}

#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub message: &'static str,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
    pub stores: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_request(json: serde_json::Value) -> CreateOrderRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn empty_products_fail_validation() {
        let req = order_request(serde_json::json!({ "products": [] }));
        assert!(req.validate().is_err());

        let req = order_request(serde_json::json!({}));
        let errors = req.validate().unwrap_err();
        let products = errors.field_errors()["products"];
        assert_eq!(products[0].code, "length");
        assert_eq!(
            products[0].message.as_deref(),
            Some("products must contain at least one item")
        );
    }

    #[test]
    fn item_fields_are_validated() {
        let req = order_request(serde_json::json!({
            "products": [{ "productId": "product_1", "quantity": 0 }]
        }));
        assert!(req.validate().is_err());

        let req = order_request(serde_json::json!({
            "products": [{ "productId": "", "quantity": 2 }]
        }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_request_becomes_order_payload() {
        let req = order_request(serde_json::json!({
            "products": [{ "productId": "X", "quantity": 2 }],
            "shippingAddress": { "city": "Oslo", "zipCode": "0150" }
        }));
        req.validate().unwrap();

        let params = req.into_order(UserId(4)).unwrap();
        assert_eq!(params.user_id, UserId(4));
        assert_eq!(params.items, vec![RequestedItem::new("X", 2)]);
        assert_eq!(params.shipping_address.zip_code.as_deref(), Some("0150"));
    }

    #[test]
    fn product_request_requires_catalogue_fields() {
        let req: CreateProductRequest = serde_json::from_value(serde_json::json!({
            "name": "Mug",
            "price": "7.50"
        }))
        .unwrap();
        assert!(req.validate().is_err());

        let req: CreateProductRequest = serde_json::from_value(serde_json::json!({
            "name": "Mug",
            "description": "Stoneware",
            "category": "kitchen",
            "price": 7.5
        }))
        .unwrap();
        req.validate().unwrap();
        let params = req.into_product(UserId(1)).unwrap();
        assert_eq!(params.stock, 0);
        assert_eq!(params.price, Decimal::new(75, 1));
    }
}
