//! Repository ports.
//!
//! One trait per storage concern, with one implementation per backend
//! (Postgres in production, in-memory as the test double), selected by the
//! composition root. Backends return an empty result as "not found"; turning
//! that into the appropriate domain failure happens here, behind the port.

use async_trait::async_trait;

use diskus_core::{CommentId, DomainResult, ThreadId, UserId};

use crate::comment::{AddedComment, CommentDetail, NewComment};
use crate::thread::{AddedThread, NewThread, ThreadRecord};
use crate::user::{RegisterUser, RegisteredUser};

/// Mints the random suffix for entity ids.
///
/// Collision resistance is entirely the generator's contract; the core does
/// not re-verify uniqueness beyond the storage engine's key constraint.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Persistence for registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user whose password has already been hashed.
    async fn add_user(&self, user: &RegisterUser) -> DomainResult<RegisteredUser>;

    /// Fails with `Invariant("username tidak tersedia")` when taken.
    async fn verify_available_username(&self, username: &str) -> DomainResult<()>;

    /// Fails with `Invariant("username tidak ditemukan")` when unknown.
    async fn get_password_by_username(&self, username: &str) -> DomainResult<String>;

    /// Fails with `Invariant("username tidak ditemukan")` when unknown.
    async fn get_id_by_username(&self, username: &str) -> DomainResult<UserId>;
}

/// The refresh-token revocation ledger — the single source of truth for
/// "is this session still alive".
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Persist a newly issued refresh token. Token strings are unique per
    /// issuance; a duplicate insert is a programmer defect, not a normal path.
    async fn add_token(&self, token: &str) -> DomainResult<()>;

    /// Fails with `Invariant("refresh token tidak ditemukan di database")`
    /// when the token is absent. Must be called before trusting any
    /// refresh-token claim.
    async fn check_availability_token(&self, token: &str) -> DomainResult<()>;

    /// Revoke a token. Deleting a non-existent token is not an error
    /// (logout is idempotent), but a later availability check on the same
    /// string must fail.
    async fn delete_token(&self, token: &str) -> DomainResult<()>;
}

/// Persistence for threads.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: &NewThread) -> DomainResult<AddedThread>;

    /// Fails with `NotFound("thread tidak ditemukan")` when absent.
    async fn get_thread_by_id(&self, id: &ThreadId) -> DomainResult<ThreadRecord>;

    /// Existence check only; same failure as [`Self::get_thread_by_id`].
    async fn verify_available_thread_by_id(&self, id: &ThreadId) -> DomainResult<()>;
}

/// Ownership check input for a comment mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentAccess {
    pub comment_id: CommentId,
    pub thread_id: ThreadId,
    pub credential_id: UserId,
}

/// Persistence and authorization gate for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: &NewComment) -> DomainResult<AddedComment>;

    /// Ownership gate for comment mutations.
    ///
    /// Existence is checked strictly before ownership: an unknown
    /// `(comment_id, thread_id)` pair fails with `NotFound`, a known pair
    /// owned by someone else fails with `Authorization`. The two failures
    /// stay distinguishable to the caller.
    async fn verify_comment_access(&self, access: &CommentAccess) -> DomainResult<()>;

    /// Soft delete: flips `is_delete` to true exactly once; the row is never
    /// physically removed. Every call path goes through
    /// [`Self::verify_comment_access`] first.
    async fn delete_comment_by_id(&self, id: &CommentId) -> DomainResult<()>;

    /// Rendered comments for a thread, ordered by ascending creation date.
    /// The ordering is a correctness requirement, not cosmetic.
    async fn get_comments_by_thread_id(&self, id: &ThreadId) -> DomainResult<Vec<CommentDetail>>;
}
