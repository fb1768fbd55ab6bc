use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use diskus_auth::AuthenticationTokenManager;

use crate::app::errors;
use crate::context::CredentialContext;

#[derive(Clone)]
pub struct AuthState {
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())
        .map_err(|message| errors::json_fail(StatusCode::UNAUTHORIZED, message))?;

    let claims = state
        .token_manager
        .verify_access_token(token)
        .map_err(|e| errors::json_fail(StatusCode::UNAUTHORIZED, e.to_string()))?;

    req.extensions_mut()
        .insert(CredentialContext::new(claims.id, claims.username));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, &'static str> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or("Missing authentication")?;

    let header = header.to_str().map_err(|_| "Missing authentication")?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or("Missing authentication")?;

    let token = header.trim();
    if token.is_empty() {
        return Err("Missing authentication");
    }

    Ok(token)
}
