//! In-memory repositories.
//!
//! Test doubles mirroring the Postgres schema: one shared [`InMemoryDatabase`]
//! plays the role of the connection pool, and each repository holds an `Arc`
//! to it so joins across tables behave like their SQL counterparts.
//! Intended for tests/dev; not optimized for performance.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use diskus_core::{CommentId, DomainError, DomainResult, ThreadId, UserId};
use diskus_domain::{
    AddedComment, AddedThread, AuthenticationRepository, CommentAccess, CommentDetail,
    CommentRepository, IdGenerator, NewComment, NewThread, RegisterUser, RegisteredUser,
    ThreadRecord, ThreadRepository, UserRepository,
};

#[derive(Debug, Clone)]
struct UserRow {
    id: UserId,
    username: String,
    password: String,
    fullname: String,
}

#[derive(Debug, Clone)]
struct ThreadRow {
    id: ThreadId,
    title: String,
    body: String,
    owner: UserId,
    date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct CommentRow {
    id: CommentId,
    thread_id: ThreadId,
    owner: UserId,
    content: String,
    date: DateTime<Utc>,
    is_delete: bool,
}

/// Shared backing store for the in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    users: RwLock<Vec<UserRow>>,
    authentications: RwLock<HashSet<String>>,
    threads: RwLock<Vec<ThreadRow>>,
    comments: RwLock<Vec<CommentRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn poisoned(_: impl std::fmt::Debug) -> DomainError {
    DomainError::internal("lock poisoned")
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

pub struct InMemoryUserRepository {
    db: Arc<InMemoryDatabase>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryUserRepository {
    pub fn new(db: Arc<InMemoryDatabase>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { db, id_generator }
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add_user(&self, user: &RegisterUser) -> DomainResult<RegisteredUser> {
        let id = UserId::from_suffix(&self.id_generator.generate());
        let mut users = self.db.users.write().map_err(poisoned)?;
        users.push(UserRow {
            id: id.clone(),
            username: user.username.clone(),
            password: user.password.clone(),
            fullname: user.fullname.clone(),
        });
        Ok(RegisteredUser {
            id,
            username: user.username.clone(),
            fullname: user.fullname.clone(),
        })
    }

    async fn verify_available_username(&self, username: &str) -> DomainResult<()> {
        let users = self.db.users.read().map_err(poisoned)?;
        if users.iter().any(|u| u.username == username) {
            return Err(DomainError::invariant("username tidak tersedia"));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> DomainResult<String> {
        let users = self.db.users.read().map_err(poisoned)?;
        users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password.clone())
            .ok_or_else(|| DomainError::invariant("username tidak ditemukan"))
    }

    async fn get_id_by_username(&self, username: &str) -> DomainResult<UserId> {
        let users = self.db.users.read().map_err(poisoned)?;
        users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id.clone())
            .ok_or_else(|| DomainError::invariant("username tidak ditemukan"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authentications (the revocation ledger)
// ─────────────────────────────────────────────────────────────────────────────

pub struct InMemoryAuthenticationRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryAuthenticationRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl AuthenticationRepository for InMemoryAuthenticationRepository {
    async fn add_token(&self, token: &str) -> DomainResult<()> {
        let mut tokens = self.db.authentications.write().map_err(poisoned)?;
        tokens.insert(token.to_string());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> DomainResult<()> {
        let tokens = self.db.authentications.read().map_err(poisoned)?;
        if !tokens.contains(token) {
            return Err(DomainError::invariant(
                "refresh token tidak ditemukan di database",
            ));
        }
        Ok(())
    }

    async fn delete_token(&self, token: &str) -> DomainResult<()> {
        let mut tokens = self.db.authentications.write().map_err(poisoned)?;
        tokens.remove(token);
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Threads
// ─────────────────────────────────────────────────────────────────────────────

pub struct InMemoryThreadRepository {
    db: Arc<InMemoryDatabase>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryThreadRepository {
    pub fn new(db: Arc<InMemoryDatabase>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { db, id_generator }
    }
}

#[async_trait::async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn add_thread(&self, thread: &NewThread) -> DomainResult<AddedThread> {
        let id = ThreadId::from_suffix(&self.id_generator.generate());
        let mut threads = self.db.threads.write().map_err(poisoned)?;
        threads.push(ThreadRow {
            id: id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner: thread.owner.clone(),
            date: Utc::now(),
        });
        Ok(AddedThread {
            id,
            title: thread.title.clone(),
            owner: thread.owner.clone(),
        })
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> DomainResult<ThreadRecord> {
        let threads = self.db.threads.read().map_err(poisoned)?;
        let row = threads
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| DomainError::not_found("thread tidak ditemukan"))?;

        let users = self.db.users.read().map_err(poisoned)?;
        let username = users
            .iter()
            .find(|u| u.id == row.owner)
            .map(|u| u.username.clone())
            .ok_or_else(|| DomainError::internal("thread owner has no user row"))?;

        Ok(ThreadRecord {
            id: row.id.clone(),
            title: row.title.clone(),
            body: row.body.clone(),
            date: row.date,
            username,
        })
    }

    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> DomainResult<()> {
        let threads = self.db.threads.read().map_err(poisoned)?;
        if !threads.iter().any(|t| &t.id == id) {
            return Err(DomainError::not_found("thread tidak ditemukan"));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comments
// ─────────────────────────────────────────────────────────────────────────────

pub struct InMemoryCommentRepository {
    db: Arc<InMemoryDatabase>,
    id_generator: Arc<dyn IdGenerator>,
}

impl InMemoryCommentRepository {
    pub fn new(db: Arc<InMemoryDatabase>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { db, id_generator }
    }
}

#[async_trait::async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn add_comment(&self, comment: &NewComment) -> DomainResult<AddedComment> {
        let id = CommentId::from_suffix(&self.id_generator.generate());
        let mut comments = self.db.comments.write().map_err(poisoned)?;
        comments.push(CommentRow {
            id: id.clone(),
            thread_id: comment.thread_id.clone(),
            owner: comment.owner.clone(),
            content: comment.content.clone(),
            date: Utc::now(),
            is_delete: false,
        });
        Ok(AddedComment {
            id,
            content: comment.content.clone(),
            owner: comment.owner.clone(),
        })
    }

    async fn verify_comment_access(&self, access: &CommentAccess) -> DomainResult<()> {
        let comments = self.db.comments.read().map_err(poisoned)?;

        // Existence strictly before ownership.
        let row = comments
            .iter()
            .find(|c| c.id == access.comment_id && c.thread_id == access.thread_id)
            .ok_or_else(|| DomainError::not_found("comment tidak ditemukan"))?;

        if row.owner != access.credential_id {
            return Err(DomainError::authorization(
                "anda tidak berhak mengakses resource ini",
            ));
        }
        Ok(())
    }

    async fn delete_comment_by_id(&self, id: &CommentId) -> DomainResult<()> {
        let mut comments = self.db.comments.write().map_err(poisoned)?;
        if let Some(row) = comments.iter_mut().find(|c| &c.id == id) {
            row.is_delete = true;
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, id: &ThreadId) -> DomainResult<Vec<CommentDetail>> {
        let comments = self.db.comments.read().map_err(poisoned)?;
        let users = self.db.users.read().map_err(poisoned)?;

        let mut rows: Vec<&CommentRow> = comments.iter().filter(|c| &c.thread_id == id).collect();
        rows.sort_by_key(|c| c.date);

        rows.into_iter()
            .map(|row| {
                let username = users
                    .iter()
                    .find(|u| u.id == row.owner)
                    .map(|u| u.username.clone())
                    .ok_or_else(|| DomainError::internal("comment owner has no user row"))?;
                Ok(CommentDetail::render(
                    row.id.clone(),
                    username,
                    row.date,
                    row.content.clone(),
                    row.is_delete,
                ))
            })
            .collect()
    }
}
