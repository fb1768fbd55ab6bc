//! `diskus-domain` — validated forum entities and repository ports.
//!
//! Entities are pure value objects: constructed from a raw JSON mapping, they
//! either come out fully validated or fail with a shape error before anything
//! reaches storage. Repository ports are the seams behind which the Postgres
//! and in-memory backends live.

pub mod comment;
pub mod payload;
pub mod repository;
pub mod thread;
pub mod user;

pub use comment::{AddedComment, CommentDetail, NewComment, DELETED_COMMENT_CONTENT};
pub use repository::{
    AuthenticationRepository, CommentAccess, CommentRepository, IdGenerator, ThreadRepository,
    UserRepository,
};
pub use thread::{AddedThread, NewThread, ThreadDetail, ThreadRecord};
pub use user::{RegisterUser, RegisteredUser, UserLogin};
