use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
};
use serde_json::{Value, json};

use diskus_core::{CommentId, ThreadId};
use diskus_domain::CommentAccess;

use crate::app::errors;
use crate::app::routes::threads::with_owner;
use crate::app::services::AppServices;
use crate::context::CredentialContext;

pub fn router() -> Router {
    Router::new()
        .route("/threads/:thread_id/comments", post(post_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(delete_comment),
        )
}

pub async fn post_comment(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(credential): Extension<CredentialContext>,
    Path(thread_id): Path<String>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    let mut payload = with_owner(body, &credential);
    if let Value::Object(map) = &mut payload {
        map.insert("threadId".to_string(), Value::String(thread_id));
    }

    match services.add_comment.execute(&payload).await {
        Ok(added_comment) => (
            StatusCode::CREATED,
            Json(json!({
                "status": "success",
                "data": { "addedComment": added_comment },
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_comment(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(credential): Extension<CredentialContext>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> axum::response::Response {
    let access = CommentAccess {
        comment_id: CommentId::new(comment_id),
        thread_id: ThreadId::new(thread_id),
        credential_id: credential.id().clone(),
    };

    match services.delete_comment.execute(&access).await {
        Ok(()) => Json(json!({ "status": "success" })).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
