use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::{
    collaborators::{Authenticator, EmailValidator},
    types::{HttpRequest, HttpResponse},
};
use crate::shared::LoginError;

/// Validates login credentials and hands them to the authenticator.
///
/// Holds no state besides its collaborators, so one instance can serve
/// any number of concurrent requests. A collaborator slot left empty by
/// the builder turns every request that reaches it into a server error.
pub struct LoginRouter {
    authenticator: Option<Arc<dyn Authenticator>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
}

impl LoginRouter {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        email_validator: Arc<dyn EmailValidator>,
    ) -> Self {
        Self {
            authenticator: Some(authenticator),
            email_validator: Some(email_validator),
        }
    }

    pub fn builder() -> LoginRouterBuilder {
        LoginRouterBuilder::new()
    }

    /// Maps a login request to its response. Never fails: every
    /// collaborator fault comes back as a 500.
    #[instrument(name = "login_route", skip(self, http_request))]
    pub async fn route(&self, http_request: Option<HttpRequest>) -> HttpResponse {
        match self.login(http_request).await {
            Ok(access_token) => {
                info!("Login succeeded");
                HttpResponse::ok(access_token)
            }
            Err(login_error) => {
                warn!(
                    status = %login_error.status_code(),
                    error = %login_error,
                    "Login rejected"
                );
                HttpResponse::from_error(login_error)
            }
        }
    }

    async fn login(&self, http_request: Option<HttpRequest>) -> Result<String, LoginError> {
        let body = http_request
            .and_then(|request| request.body)
            .ok_or_else(|| {
                warn!("Request arrived without a body");
                LoginError::Server
            })?;

        // Client fields are checked before collaborators
        let email = required_param(body.email, "email")?;
        let password = required_param(body.password, "password")?;

        let email_validator = self.email_validator.as_ref().ok_or_else(|| {
            error!("No email validator configured");
            LoginError::Server
        })?;

        debug!(email = %email, "Validating email format");
        let is_email_valid = email_validator.is_valid(&email).map_err(|e| {
            error!(error = %e, "Email validator failed");
            LoginError::Server
        })?;

        if !is_email_valid {
            return Err(LoginError::invalid_param("email"));
        }

        let authenticator = self.authenticator.as_ref().ok_or_else(|| {
            error!("No authenticator configured");
            LoginError::Server
        })?;

        debug!(email = %email, "Authenticating credentials");
        let access_token = authenticator.auth(&email, &password).await.map_err(|e| {
            error!(error = %e, "Authenticator failed");
            LoginError::Server
        })?;

        match access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(LoginError::Unauthorized),
        }
    }
}

/// Absent and empty values are both missing
fn required_param(value: Option<String>, name: &str) -> Result<String, LoginError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LoginError::missing_param(name))
}

/// Builder for a router with optional collaborators
#[derive(Default)]
pub struct LoginRouterBuilder {
    authenticator: Option<Arc<dyn Authenticator>>,
    email_validator: Option<Arc<dyn EmailValidator>>,
}

impl LoginRouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn with_email_validator(mut self, email_validator: Arc<dyn EmailValidator>) -> Self {
        self.email_validator = Some(email_validator);
        self
    }

    pub fn build(self) -> LoginRouter {
        LoginRouter {
            authenticator: self.authenticator,
            email_validator: self.email_validator,
        }
    }
}
