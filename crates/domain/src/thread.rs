//! Thread entities: inbound payload, persistence acknowledgement, detail view.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use diskus_core::{DomainResult, ThreadId, UserId};

use crate::comment::CommentDetail;
use crate::payload::{require_array, require_date, require_str};

/// Inbound payload for creating a thread.
///
/// # Invariants
/// - `title` and `body` are non-empty strings.
/// - `owner` carries the authenticated caller's id, never a client-chosen one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: UserId,
}

impl NewThread {
    const ENTITY: &'static str = "NEW_THREAD";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            title: require_str(payload, Self::ENTITY, "title")?,
            body: require_str(payload, Self::ENTITY, "body")?,
            owner: UserId::new(require_str(payload, Self::ENTITY, "owner")?),
        })
    }
}

/// Acknowledgement returned after a thread is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: ThreadId,
    pub title: String,
    pub owner: UserId,
}

impl AddedThread {
    const ENTITY: &'static str = "ADDED_THREAD";

    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        Ok(Self {
            id: ThreadId::new(require_str(payload, Self::ENTITY, "id")?),
            title: require_str(payload, Self::ENTITY, "title")?,
            owner: UserId::new(require_str(payload, Self::ENTITY, "owner")?),
        })
    }
}

/// A thread row joined with its author's username, before comments are
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Outbound view of a thread with its rendered comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

impl ThreadDetail {
    const ENTITY: &'static str = "THREAD_DETAIL";

    /// Compose the view from a fetched record plus its rendered comments.
    pub fn from_record(record: ThreadRecord, comments: Vec<CommentDetail>) -> Self {
        Self {
            id: record.id,
            title: record.title,
            body: record.body,
            date: record.date,
            username: record.username,
            comments,
        }
    }

    /// Validate a raw mapping claiming to be a thread detail.
    ///
    /// `comments` must be a sequence; each element must itself be a rendered
    /// comment mapping. Element shape violations are reported under this
    /// entity's code, since the caller handed over the whole mapping.
    pub fn from_payload(payload: &Value) -> DomainResult<Self> {
        let comments = require_array(payload, Self::ENTITY, "comments")?
            .iter()
            .map(|comment| {
                Ok(CommentDetail {
                    id: diskus_core::CommentId::new(require_str(comment, Self::ENTITY, "id")?),
                    username: require_str(comment, Self::ENTITY, "username")?,
                    date: require_date(comment, Self::ENTITY, "date")?,
                    content: require_str(comment, Self::ENTITY, "content")?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            id: ThreadId::new(require_str(payload, Self::ENTITY, "id")?),
            title: require_str(payload, Self::ENTITY, "title")?,
            body: require_str(payload, Self::ENTITY, "body")?,
            date: require_date(payload, Self::ENTITY, "date")?,
            username: require_str(payload, Self::ENTITY, "username")?,
            comments,
        })
    }
}
