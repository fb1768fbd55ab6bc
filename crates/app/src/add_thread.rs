//! Create a thread.

use std::sync::Arc;

use serde_json::Value;

use diskus_core::DomainResult;
use diskus_domain::{AddedThread, NewThread, ThreadRepository};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    /// `payload` carries the request body plus the authenticated caller's id
    /// under `owner` (injected by the handler, never client-supplied).
    pub async fn execute(&self, payload: &Value) -> DomainResult<AddedThread> {
        let new_thread = NewThread::from_payload(payload)?;
        self.thread_repository.add_thread(&new_thread).await
    }
}
