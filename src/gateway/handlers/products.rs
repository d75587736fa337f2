use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::auth::Claims;
use crate::catalog::{self, ProductPage, ProductQuery};
use crate::gateway::error::ApiError;
use crate::gateway::state::AppState;
use crate::gateway::types::{CreateProductRequest, ProductCreated};
use crate::model::{Product, ProductId};
use actor_framework::ActorClient;

/// `POST /api/products`
#[instrument(skip_all, fields(user = %claims.sub))]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductCreated>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let params = request.into_product(claims.user_id()?)?;
    let id = state.products.create_product(params).await?;
    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("{id} vanished after creation")))?;

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product created successfully",
            product,
        }),
    ))
}

/// `GET /api/products?category=&search=&page=&limit=`
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ProductPage>, ApiError> {
    let Query(query) = query?;
    let products = state.products.list().await?;
    Ok(Json(query.apply(products)))
}

/// `GET /api/products/{id}`
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let not_found = || ApiError::NotFound("Product not found".into());
    let id: ProductId = id.parse().map_err(|_| not_found())?;
    state
        .products
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// `GET /api/categories`
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let products = state.products.list().await?;
    Ok(Json(catalog::categories(&products)))
}
