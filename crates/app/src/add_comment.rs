//! Comment on a thread.

use std::sync::Arc;

use serde_json::Value;

use diskus_core::DomainResult;
use diskus_domain::{AddedComment, CommentRepository, NewComment, ThreadRepository};

pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    pub async fn execute(&self, payload: &Value) -> DomainResult<AddedComment> {
        let new_comment = NewComment::from_payload(payload)?;
        self.thread_repository
            .verify_available_thread_by_id(&new_comment.thread_id)
            .await?;
        self.comment_repository.add_comment(&new_comment).await
    }
}
