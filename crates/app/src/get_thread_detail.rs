//! Render a thread with its comments.

use std::sync::Arc;

use diskus_core::{DomainResult, ThreadId};
use diskus_domain::{CommentRepository, ThreadDetail, ThreadRepository};

pub struct GetThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl GetThreadDetailUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(&self, thread_id: &ThreadId) -> DomainResult<ThreadDetail> {
        let record = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;
        Ok(ThreadDetail::from_record(record, comments))
    }
}
