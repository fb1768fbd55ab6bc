//! Backend selection and use-case construction.
//!
//! Every use case is built exactly once; handlers reach them through a
//! shared [`AppServices`] extension.

use std::sync::Arc;

use sqlx::PgPool;

use diskus_app::{
    AddCommentUseCase, AddThreadUseCase, AddUserUseCase, DeleteCommentUseCase,
    GetThreadDetailUseCase, LoginUserUseCase, LogoutUserUseCase, PasswordHash,
    RefreshAuthenticationUseCase,
};
use diskus_auth::AuthenticationTokenManager;
use diskus_domain::{
    AuthenticationRepository, CommentRepository, IdGenerator, ThreadRepository, UserRepository,
};
use diskus_infra::{
    Argon2PasswordHash, InMemoryAuthenticationRepository, InMemoryCommentRepository,
    InMemoryDatabase, InMemoryThreadRepository, InMemoryUserRepository,
    PgAuthenticationRepository, PgCommentRepository, PgThreadRepository, PgUserRepository,
    SequentialIdGenerator, UuidIdGenerator,
};

pub struct AppServices {
    pub add_user: AddUserUseCase,
    pub login_user: LoginUserUseCase,
    pub refresh_authentication: RefreshAuthenticationUseCase,
    pub logout_user: LogoutUserUseCase,
    pub add_thread: AddThreadUseCase,
    pub get_thread_detail: GetThreadDetailUseCase,
    pub add_comment: AddCommentUseCase,
    pub delete_comment: DeleteCommentUseCase,
}

struct Backends {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

fn assemble(backends: Backends, token_manager: Arc<dyn AuthenticationTokenManager>) -> AppServices {
    AppServices {
        add_user: AddUserUseCase::new(
            backends.user_repository.clone(),
            backends.password_hash.clone(),
        ),
        login_user: LoginUserUseCase::new(
            backends.user_repository.clone(),
            backends.authentication_repository.clone(),
            token_manager.clone(),
            backends.password_hash,
        ),
        refresh_authentication: RefreshAuthenticationUseCase::new(
            backends.authentication_repository.clone(),
            token_manager,
        ),
        logout_user: LogoutUserUseCase::new(backends.authentication_repository),
        add_thread: AddThreadUseCase::new(backends.thread_repository.clone()),
        get_thread_detail: GetThreadDetailUseCase::new(
            backends.thread_repository.clone(),
            backends.comment_repository.clone(),
        ),
        add_comment: AddCommentUseCase::new(
            backends.comment_repository.clone(),
            backends.thread_repository,
        ),
        delete_comment: DeleteCommentUseCase::new(backends.comment_repository),
    }
}

/// Production wiring: Postgres repositories over a shared pool.
pub fn build_postgres_services(
    pool: PgPool,
    token_manager: Arc<dyn AuthenticationTokenManager>,
) -> AppServices {
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);
    assemble(
        Backends {
            user_repository: Arc::new(PgUserRepository::new(pool.clone(), ids.clone())),
            authentication_repository: Arc::new(PgAuthenticationRepository::new(pool.clone())),
            thread_repository: Arc::new(PgThreadRepository::new(pool.clone(), ids.clone())),
            comment_repository: Arc::new(PgCommentRepository::new(pool, ids)),
            password_hash: Arc::new(Argon2PasswordHash::new()),
        },
        token_manager,
    )
}

/// In-memory wiring with deterministic ids, for tests and local runs
/// without a database.
pub fn build_in_memory_services(
    token_manager: Arc<dyn AuthenticationTokenManager>,
) -> AppServices {
    let db = InMemoryDatabase::new();
    let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIdGenerator::new());
    assemble(
        Backends {
            user_repository: Arc::new(InMemoryUserRepository::new(db.clone(), ids.clone())),
            authentication_repository: Arc::new(InMemoryAuthenticationRepository::new(db.clone())),
            thread_repository: Arc::new(InMemoryThreadRepository::new(db.clone(), ids.clone())),
            comment_repository: Arc::new(InMemoryCommentRepository::new(db, ids)),
            password_hash: Arc::new(Argon2PasswordHash::new()),
        },
        token_manager,
    )
}
