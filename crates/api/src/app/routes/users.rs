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
    Router::new().route("/users", post(post_user))
}

pub async fn post_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    match services.add_user.execute(&body).await {
        Ok(added_user) => (
            StatusCode::CREATED,
            Json(json!({
                "status": "success",
                "data": { "addedUser": added_user },
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
