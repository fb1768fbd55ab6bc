//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: backend selection and use-case construction
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use diskus_auth::AuthenticationTokenManager;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(
    services: Arc<AppServices>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
) -> Router {
    let auth_state = middleware::AuthState { token_manager };

    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(protected)
        .layer(Extension(services))
}
