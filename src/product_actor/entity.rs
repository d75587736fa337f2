//! [`ActorEntity`] implementation for [`Product`].
//!
//! Creation validates the catalogue fields; stock checks and reservations are custom actions.

use super::actions::{ProductAction, ProductActionResult, StockReceipt};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

fn require(field: &str, value: &str) -> Result<(), ProductError> {
    if value.trim().is_empty() {
        return Err(ProductError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// Highest accepted unit price. Any `u32` quantity times this still fits a `Decimal`, with
/// room left for the order total.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn check_price(price: Decimal) -> Result<(), ProductError> {
    if price.is_sign_negative() {
        return Err(ProductError::ValidationError(
            "price must not be negative".to_string(),
        ));
    }
    if price > MAX_UNIT_PRICE {
        return Err(ProductError::ValidationError(format!(
            "price must not exceed {MAX_UNIT_PRICE}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        require("name", &params.name)?;
        require("description", &params.description)?;
        require("category", &params.category)?;
        check_price(params.price)?;

        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            category: params.category,
            price: params.price,
            stock: params.stock,
            image_url: params.image_url,
            created_by: params.created_by,
            created_at: Utc::now(),
        })
    }

    /// Reprices the product. Stock is not updatable here; see [`ProductAction`].
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: returns the current stock level
    /// - `ReserveStock`: decrements stock if enough is available, returns a [`StockReceipt`]
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(0) => Err(ProductError::ValidationError(
                "quantity must be at least 1".to_string(),
            )),
            ProductAction::ReserveStock(quantity) => {
                if quantity > self.stock {
                    return Err(ProductError::InsufficientStock {
                        product: self.name.clone(),
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::ReserveStock(StockReceipt {
                    product_id: self.id,
                    name: self.name.clone(),
                    unit_price: self.price,
                    remaining: self.stock,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn params(stock: u32) -> ProductCreate {
        ProductCreate {
            name: "Lamp".into(),
            description: "Desk lamp".into(),
            category: "home".into(),
            price: Decimal::new(1000, 2),
            stock,
            image_url: None,
            created_by: UserId(1),
        }
    }

    #[test]
    fn rejects_missing_fields_and_negative_price() {
        let mut p = params(1);
        p.category = "  ".into();
        assert_eq!(
            Product::from_create_params(ProductId(1), p).unwrap_err(),
            ProductError::ValidationError("category is required".into())
        );

        let mut p = params(1);
        p.price = Decimal::new(-1, 0);
        assert!(matches!(
            Product::from_create_params(ProductId(1), p),
            Err(ProductError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_price_whose_order_total_could_overflow() {
        let mut p = params(1);
        p.price = Decimal::MAX;
        assert!(matches!(
            Product::from_create_params(ProductId(1), p),
            Err(ProductError::ValidationError(_))
        ));

        let mut p = params(1);
        p.price = MAX_UNIT_PRICE;
        let product = Product::from_create_params(ProductId(1), p).unwrap();
        assert!(product
            .price
            .checked_mul(Decimal::from(u32::MAX))
            .is_some());
    }

    #[tokio::test]
    async fn update_reprices_within_bounds() {
        let mut product = Product::from_create_params(ProductId(1), params(5)).unwrap();

        product
            .on_update(
                ProductUpdate {
                    price: Some(Decimal::new(1250, 2)),
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(product.price, Decimal::new(1250, 2));

        let err = product
            .on_update(
                ProductUpdate {
                    price: Some(Decimal::MAX),
                },
                &(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::ValidationError(_)));
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert_eq!(product.stock, 5);
    }

    #[tokio::test]
    async fn reserve_decrements_or_refuses() {
        let mut product = Product::from_create_params(ProductId(4), params(5)).unwrap();

        let result = product
            .handle_action(ProductAction::ReserveStock(3), &())
            .await
            .unwrap();
        assert_eq!(
            result,
            ProductActionResult::ReserveStock(StockReceipt {
                product_id: ProductId(4),
                name: "Lamp".into(),
                unit_price: Decimal::new(1000, 2),
                remaining: 2,
            })
        );

        let err = product
            .handle_action(ProductAction::ReserveStock(3), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                product: "Lamp".into(),
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(product.stock, 2);
    }

    #[tokio::test]
    async fn zero_quantity_is_rejected() {
        let mut product = Product::from_create_params(ProductId(1), params(5)).unwrap();
        assert!(matches!(
            product.handle_action(ProductAction::ReserveStock(0), &()).await,
            Err(ProductError::ValidationError(_))
        ));
        assert_eq!(product.stock, 5);
    }
}
