use async_trait::async_trait;

/// Opaque fault raised by a collaborator. The router never looks inside it.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Trait for credential authentication
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the access token for valid credentials, `None` (or an empty
    /// token) when the credentials are rejected.
    async fn auth(&self, email: &str, password: &str)
        -> Result<Option<String>, CollaboratorError>;
}

/// Trait for email format validation
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError>;
}
