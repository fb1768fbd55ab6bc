//! Soft-delete a comment after an ownership check.

use std::sync::Arc;

use diskus_core::DomainResult;
use diskus_domain::{CommentAccess, CommentRepository};

pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    /// The ownership gate and the soft delete are never decoupled: this is
    /// the only call path to `delete_comment_by_id`.
    pub async fn execute(&self, access: &CommentAccess) -> DomainResult<()> {
        self.comment_repository.verify_comment_access(access).await?;
        self.comment_repository
            .delete_comment_by_id(&access.comment_id)
            .await
    }
}
