//! `diskus-infra` — storage and security backends.
//!
//! Every port from `diskus-domain`/`diskus-app` has two implementations
//! here: a Postgres one for production and an in-memory one used as the test
//! double, both selected by the composition root.

pub mod id_generator;
pub mod repository;
pub mod security;

pub use id_generator::{SequentialIdGenerator, UuidIdGenerator};
pub use repository::in_memory::{
    InMemoryAuthenticationRepository, InMemoryCommentRepository, InMemoryDatabase,
    InMemoryThreadRepository, InMemoryUserRepository,
};
pub use repository::postgres::{
    PgAuthenticationRepository, PgCommentRepository, PgThreadRepository, PgUserRepository,
};
pub use security::Argon2PasswordHash;

/// Embedded SQL migrations (`crates/infra/migrations`).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
