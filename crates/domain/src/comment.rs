//! Comment entities and the soft-delete redaction rule.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use diskus_core::{CommentId, DomainResult, ThreadId, UserId};

use crate::payload::{require_bool, require_date, require_str};

/// Fixed marker rendered in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Inbound payload for creating a comment.
///
/// # Invariants
/// - `content` is a non-empty string.
/// - `thread_id` must reference an existing thread (checked by the use case
///   before persistence, not here).
/// - The `(owner, thread_id)` pair is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub thread_id: ThreadId,
    pub content: String,
    pub owner: UserId,
}

impl NewComment {
    const ENTITY: &'static str = "NEW_COMMENT";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            thread_id: ThreadId::new(require_str(payload, Self::ENTITY, "threadId")?),
            content: require_str(payload, Self::ENTITY, "content")?,
            owner: UserId::new(require_str(payload, Self::ENTITY, "owner")?),
        })
    }
}

/// Acknowledgement returned after a comment is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
}

impl AddedComment {
    const ENTITY: &'static str = "ADDED_COMMENT";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            id: CommentId::new(require_str(payload, Self::ENTITY, "id")?),
            content: require_str(payload, Self::ENTITY, "content")?,
            owner: UserId::new(require_str(payload, Self::ENTITY, "owner")?),
        })
    }
}

/// Outbound view of a single comment within a thread listing.
///
/// Construction is the single place the redaction rule lives: a soft-deleted
/// row keeps its author and date for audit, but its content is rendered as
/// [`DELETED_COMMENT_CONTENT`] to every reader. The flag itself is not
/// exposed on the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDetail {
    pub id: CommentId,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl CommentDetail {
    const ENTITY: &'static str = "COMMENT_DETAIL";

    /// Render a comment row, applying the redaction rule.
    pub fn render(
        id: CommentId,
        username: String,
        date: DateTime<Utc>,
        content: String,
        is_delete: bool,
    ) -> Self {
        let content = if is_delete {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            content
        };
        Self {
            id,
            username,
            date,
            content,
        }
    }

    /// Validate a raw comment-row mapping and render it.
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let id = CommentId::new(require_str(payload, Self::ENTITY, "id")?);
        let username = require_str(payload, Self::ENTITY, "username")?;
        let date = require_date(payload, Self::ENTITY, "date")?;
        let content = require_str(payload, Self::ENTITY, "content")?;
        let is_delete = require_bool(payload, Self::ENTITY, "is_delete")?;
        Ok(Self::render(id, username, date, content, is_delete))
    }
}
