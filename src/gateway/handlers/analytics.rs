use axum::{extract::State, Json};
use std::sync::Arc;

use crate::analytics::{summarize, AnalyticsReport};
use crate::gateway::error::ApiError;
use crate::gateway::state::AppState;
use actor_framework::ActorClient;

/// `GET /api/analytics`
pub async fn get_analytics(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AnalyticsReport>, ApiError> {
    let users = state.users.list().await?;
    let products = state.products.list().await?;
    let orders = state.orders.list().await?;
    Ok(Json(summarize(users.len(), &products, orders)))
}
