use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};

use diskus_core::ThreadId;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CredentialContext;

pub fn router() -> Router {
    Router::new().route("/threads", post(post_thread))
}

pub async fn post_thread(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(credential): Extension<CredentialContext>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let payload = with_owner(body, &credential);

    match services.add_thread.execute(&payload).await {
        Ok(added_thread) => (
            StatusCode::CREATED,
            Json(json!({
                "status": "success",
                "data": { "addedThread": added_thread },
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_thread(
    Extension(services): Extension<Arc<AppServices>>,
    Path(thread_id): Path<String>,
) -> axum::response::Response {
    match services
        .get_thread_detail
        .execute(&ThreadId::new(thread_id))
        .await
    {
        Ok(thread) => Json(json!({
            "status": "success",
            "data": { "thread": thread },
        }))
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// The `owner` key always comes from the verified credential; whatever the
/// client sent under that key is discarded.
pub fn with_owner(mut body: Value, credential: &CredentialContext) -> Value {
    if let Value::Object(map) = &mut body {
        map.insert(
            "owner".to_string(),
            Value::String(credential.id().to_string()),
        );
    }
    body
}
