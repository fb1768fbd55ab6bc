//! `diskus-app` — use-case orchestration.
//!
//! One struct per operation, each holding exactly the ports it needs as typed
//! constructor arguments. The composition root in the API crate builds every
//! use case once; there is no runtime service lookup.

pub mod add_comment;
pub mod add_thread;
pub mod add_user;
pub mod delete_comment;
pub mod get_thread_detail;
pub mod login_user;
pub mod logout_user;
pub mod refresh_authentication;
pub mod security;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_comment::AddCommentUseCase;
pub use add_thread::AddThreadUseCase;
pub use add_user::AddUserUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
pub use login_user::{LoginUserUseCase, NewAuthentication};
pub use logout_user::LogoutUserUseCase;
pub use refresh_authentication::RefreshAuthenticationUseCase;
pub use security::PasswordHash;
