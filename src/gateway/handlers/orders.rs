use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::auth::Claims;
use crate::gateway::error::ApiError;
use crate::gateway::state::AppState;
use crate::gateway::types::{CreateOrderRequest, OrderCreated};
use crate::model::Order;

/// `POST /api/orders`
#[instrument(skip_all, fields(user = %claims.sub))]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreated>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let params = request.into_order(claims.user_id()?)?;
    let order = state.orders.place_order(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order created successfully",
            order,
        }),
    ))
}

/// `GET /api/orders`: the caller's orders, newest first.
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.orders.list_for_user(claims.user_id()?).await?;
    Ok(Json(orders))
}
