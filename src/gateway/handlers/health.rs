use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::gateway::state::AppState;
use crate::gateway::types::HealthResponse;
use crate::model::UserId;
use actor_framework::ActorClient;

/// Liveness plus a round trip to the user store.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stores = match state.users.get(UserId(0)).await {
        Ok(_) => "running",
        Err(_) => "unavailable",
    };
    Json(HealthResponse {
        status: "healthy",
        service: "storefront",
        timestamp: Utc::now(),
        stores,
    })
}
