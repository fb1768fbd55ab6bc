use diskus_core::UserId;

/// Authenticated caller for a request.
///
/// Inserted by the bearer middleware; present on every protected route. The
/// `id` here is the only credential handlers may pass into a payload as
/// `owner` — client-supplied owner fields never survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialContext {
    id: UserId,
    username: String,
}

impl CredentialContext {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
