use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::error::ApiError;
use super::state::AppState;

/// Verifies the bearer token and hands its [`Claims`](crate::auth::Claims) to the handler as a
/// request extension. No header is 401; a token that does not verify is 403.
pub async fn jwt_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    let claims = state.auth.verify_header(auth_header)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
