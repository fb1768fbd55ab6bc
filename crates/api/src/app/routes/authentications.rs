//! Session lifecycle: login, refresh, logout.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route(
        "/authentications",
        post(post_authentication)
            .put(put_authentication)
            .delete(delete_authentication),
    )
}

pub async fn post_authentication(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    match services.login_user.execute(&body).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(json!({
                "status": "success",
                "data": session,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn put_authentication(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    match services.refresh_authentication.execute(&body).await {
        Ok(access_token) => Json(json!({
            "status": "success",
            "data": { "accessToken": access_token },
        }))
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_authentication(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    match services.logout_user.execute(&body).await {
        Ok(()) => Json(json!({ "status": "success" })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
