pub mod analytics;
pub mod health;
pub mod orders;
pub mod products;

use super::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
