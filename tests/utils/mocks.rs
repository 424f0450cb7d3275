use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::RwLock;

use login_router::{Authenticator, CollaboratorError, EmailValidator};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Credentials seen by an authenticator spy
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCredentials {
    pub email: String,
    pub password: String,
}

/// Authenticator that records every call and answers with a configurable token
pub struct AuthenticatorSpy {
    access_token: RwLock<Option<String>>,
    calls: RwLock<Vec<RecordedCredentials>>,
}

impl AuthenticatorSpy {
    pub fn new(access_token: Option<&str>) -> Self {
        Self {
            access_token: RwLock::new(access_token.map(str::to_string)),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_access_token(&self, access_token: Option<&str>) {
        *self.access_token.write().await = access_token.map(str::to_string);
    }

    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<RecordedCredentials> {
        self.calls.read().await.clone()
    }

    pub async fn last_call(&self) -> Option<RecordedCredentials> {
        self.calls.read().await.last().cloned()
    }
}

#[async_trait]
impl Authenticator for AuthenticatorSpy {
    async fn auth(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, CollaboratorError> {
        self.calls.write().await.push(RecordedCredentials {
            email: email.to_string(),
            password: password.to_string(),
        });
        Ok(self.access_token().await)
    }
}

/// Authenticator that always fails
pub struct BrokenAuthenticator;

#[async_trait]
impl Authenticator for BrokenAuthenticator {
    async fn auth(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Option<String>, CollaboratorError> {
        Err("credential store unreachable".into())
    }
}

/// Authenticator issuing a token derived from the email, to tell
/// concurrent responses apart
pub struct EchoAuthenticator;

#[async_trait]
impl Authenticator for EchoAuthenticator {
    async fn auth(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<Option<String>, CollaboratorError> {
        tokio::task::yield_now().await;
        Ok(Some(format!("token-for-{}", email)))
    }
}

/// Email validator that records every email it is asked about
pub struct EmailValidatorSpy {
    is_email_valid: Mutex<bool>,
    emails: Mutex<Vec<String>>,
}

impl EmailValidatorSpy {
    pub fn new(is_email_valid: bool) -> Self {
        Self {
            is_email_valid: Mutex::new(is_email_valid),
            emails: Mutex::new(Vec::new()),
        }
    }

    pub fn set_is_email_valid(&self, is_email_valid: bool) {
        *self.is_email_valid.lock().unwrap() = is_email_valid;
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

impl EmailValidator for EmailValidatorSpy {
    fn is_valid(&self, email: &str) -> Result<bool, CollaboratorError> {
        self.emails.lock().unwrap().push(email.to_string());
        Ok(*self.is_email_valid.lock().unwrap())
    }
}

/// Email validator that always fails
pub struct BrokenEmailValidator;

impl EmailValidator for BrokenEmailValidator {
    fn is_valid(&self, _email: &str) -> Result<bool, CollaboratorError> {
        Err("validation rules failed to load".into())
    }
}
