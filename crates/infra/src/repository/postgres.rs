//! Postgres-backed repositories.
//!
//! Every statement is a single-row (or single result set) operation; the
//! engine's atomicity is the only consistency mechanism these repositories
//! rely on. An empty result set is how the store signals "not found" — the
//! mapping to the appropriate domain failure happens here, never in SQL.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;

use diskus_core::{CommentId, DomainError, DomainResult, ThreadId, UserId};
use diskus_domain::{
    AddedComment, AddedThread, AuthenticationRepository, CommentAccess, CommentDetail,
    CommentRepository, IdGenerator, NewComment, NewThread, RegisterUser, RegisteredUser,
    ThreadRecord, ThreadRepository, UserRepository,
};

fn map_sqlx_error(operation: &str, e: sqlx::Error) -> DomainError {
    DomainError::internal(format!("{operation}: {e}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

pub struct PgUserRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgUserRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait::async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username), err)]
    async fn add_user(&self, user: &RegisterUser) -> DomainResult<RegisteredUser> {
        let id = UserId::from_suffix(&self.id_generator.generate());

        let row = sqlx::query(
            "INSERT INTO users (id, username, password, fullname)
             VALUES ($1, $2, $3, $4)
             RETURNING id, username, fullname",
        )
        .bind(id.as_str())
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("add_user", e))?;

        Ok(RegisteredUser {
            id: UserId::new(row.get::<String, _>("id")),
            username: row.get("username"),
            fullname: row.get("fullname"),
        })
    }

    async fn verify_available_username(&self, username: &str) -> DomainResult<()> {
        let row = sqlx::query("SELECT username FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("verify_available_username", e))?;

        if row.is_some() {
            return Err(DomainError::invariant("username tidak tersedia"));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> DomainResult<String> {
        let row = sqlx::query("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_password_by_username", e))?;

        row.map(|r| r.get("password"))
            .ok_or_else(|| DomainError::invariant("username tidak ditemukan"))
    }

    async fn get_id_by_username(&self, username: &str) -> DomainResult<UserId> {
        let row = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_id_by_username", e))?;

        row.map(|r| UserId::new(r.get::<String, _>("id")))
            .ok_or_else(|| DomainError::invariant("username tidak ditemukan"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authentications (the revocation ledger)
// ─────────────────────────────────────────────────────────────────────────────

pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    #[instrument(skip_all, err)]
    async fn add_token(&self, token: &str) -> DomainResult<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("add_token", e))?;
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> DomainResult<()> {
        let row = sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("check_availability_token", e))?;

        if row.is_none() {
            return Err(DomainError::invariant(
                "refresh token tidak ditemukan di database",
            ));
        }
        Ok(())
    }

    #[instrument(skip_all, err)]
    async fn delete_token(&self, token: &str) -> DomainResult<()> {
        // Deleting an absent token is a no-op: logout is idempotent.
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_token", e))?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Threads
// ─────────────────────────────────────────────────────────────────────────────

pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait::async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self, thread), fields(owner = %thread.owner), err)]
    async fn add_thread(&self, thread: &NewThread) -> DomainResult<AddedThread> {
        let id = ThreadId::from_suffix(&self.id_generator.generate());

        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, owner",
        )
        .bind(id.as_str())
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("add_thread", e))?;

        Ok(AddedThread {
            id: ThreadId::new(row.get::<String, _>("id")),
            title: row.get("title"),
            owner: UserId::new(row.get::<String, _>("owner")),
        })
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> DomainResult<ThreadRecord> {
        let row = sqlx::query(
            "SELECT threads.id, title, body, date, username
             FROM threads
             JOIN users ON users.id = threads.owner
             WHERE threads.id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_thread_by_id", e))?;

        let row = row.ok_or_else(|| DomainError::not_found("thread tidak ditemukan"))?;

        Ok(ThreadRecord {
            id: ThreadId::new(row.get::<String, _>("id")),
            title: row.get("title"),
            body: row.get("body"),
            date: row.get::<DateTime<Utc>, _>("date"),
            username: row.get("username"),
        })
    }

    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> DomainResult<()> {
        let row = sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("verify_available_thread_by_id", e))?;

        if row.is_none() {
            return Err(DomainError::not_found("thread tidak ditemukan"));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comments
// ─────────────────────────────────────────────────────────────────────────────

pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait::async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, comment), fields(thread_id = %comment.thread_id), err)]
    async fn add_comment(&self, comment: &NewComment) -> DomainResult<AddedComment> {
        let id = CommentId::from_suffix(&self.id_generator.generate());

        let row = sqlx::query(
            "INSERT INTO comments (id, owner, thread_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING id, content, owner",
        )
        .bind(id.as_str())
        .bind(comment.owner.as_str())
        .bind(comment.thread_id.as_str())
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("add_comment", e))?;

        Ok(AddedComment {
            id: CommentId::new(row.get::<String, _>("id")),
            content: row.get("content"),
            owner: UserId::new(row.get::<String, _>("owner")),
        })
    }

    async fn verify_comment_access(&self, access: &CommentAccess) -> DomainResult<()> {
        let row = sqlx::query(
            "SELECT id, owner, thread_id
             FROM comments
             WHERE id = $1 AND thread_id = $2",
        )
        .bind(access.comment_id.as_str())
        .bind(access.thread_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("verify_comment_access", e))?;

        // Existence strictly before ownership.
        let row = row.ok_or_else(|| DomainError::not_found("comment tidak ditemukan"))?;

        let owner: String = row.get("owner");
        if owner != access.credential_id.as_str() {
            return Err(DomainError::authorization(
                "anda tidak berhak mengakses resource ini",
            ));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(comment_id = %id), err)]
    async fn delete_comment_by_id(&self, id: &CommentId) -> DomainResult<()> {
        // Single-row flip; the row is never physically removed.
        sqlx::query("UPDATE comments SET is_delete = true WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_comment_by_id", e))?;
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, id: &ThreadId) -> DomainResult<Vec<CommentDetail>> {
        let rows = sqlx::query(
            "SELECT comments.id, users.username, date, content, is_delete
             FROM comments
             INNER JOIN users ON users.id = comments.owner
             WHERE thread_id = $1
             ORDER BY date ASC",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_comments_by_thread_id", e))?;

        Ok(rows
            .into_iter()
            .map(|row| {
                CommentDetail::render(
                    CommentId::new(row.get::<String, _>("id")),
                    row.get("username"),
                    row.get::<DateTime<Utc>, _>("date"),
                    row.get("content"),
                    row.get("is_delete"),
                )
            })
            .collect())
    }
}
