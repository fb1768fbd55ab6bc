use axum::{Router, routing::get};

pub mod authentications;
pub mod comments;
pub mod system;
pub mod threads;
pub mod users;

/// Routes reachable without a bearer token.
pub fn public_router() -> Router {
    Router::new()
        .merge(users::router())
        .merge(authentications::router())
        .route("/threads/:thread_id", get(threads::get_thread))
}

/// Routes behind the bearer middleware.
pub fn protected_router() -> Router {
    Router::new()
        .merge(threads::router())
        .merge(comments::router())
}
