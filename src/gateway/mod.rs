//! # HTTP Gateway
//!
//! axum routes over the store clients. Protected routes sit behind
//! [`jwt_auth_middleware`](middleware::jwt_auth_middleware):
//!
//! | Route | Auth |
//! |-------|------|
//! | `POST /api/orders`, `GET /api/orders` | yes |
//! | `GET /api/analytics` | yes |
//! | `POST /api/products` | yes |
//! | `GET /api/products`, `GET /api/products/{id}`, `GET /api/categories` | no |
//! | `GET /health` | no |

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod types;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use error::ApiError;
pub use state::AppState;

use handlers::{analytics, health, orders, products};

pub fn router(state: Arc<AppState>) -> Router {
    let auth = from_fn_with_state(state.clone(), middleware::jwt_auth_middleware);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/orders",
            post(orders::create_order)
                .get(orders::list_orders)
                .route_layer(auth.clone()),
        )
        .route(
            "/api/analytics",
            get(analytics::get_analytics).route_layer(auth.clone()),
        )
        .route(
            "/api/products",
            get(products::list_products).merge(post(products::create_product).route_layer(auth)),
        )
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/categories", get(products::list_categories))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
