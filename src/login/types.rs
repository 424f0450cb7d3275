use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::shared::LoginError;

/// Login request as handed over by the transport layer.
/// Nothing is guaranteed to be present.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Option<LoginRequestBody>,
}

impl HttpRequest {
    pub fn with_body(body: LoginRequestBody) -> Self {
        Self { body: Some(body) }
    }
}

/// Credentials carried in the request body
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LoginRequestBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequestBody {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Success payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Error(LoginError),
    Success(AccessTokenResponse),
}

/// Outcome of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Builds the response for an error, taking the status from its kind
    pub fn from_error(error: LoginError) -> Self {
        Self {
            status_code: error.status_code(),
            body: ResponseBody::Error(error),
        }
    }

    pub fn bad_request(error: LoginError) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body: ResponseBody::Error(error),
        }
    }

    pub fn unauthorized() -> Self {
        Self::from_error(LoginError::Unauthorized)
    }

    pub fn server_error() -> Self {
        Self::from_error(LoginError::Server)
    }

    pub fn ok(access_token: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::OK,
            body: ResponseBody::Success(AccessTokenResponse {
                access_token: access_token.into(),
            }),
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Success(payload) => Some(&payload.access_token),
            ResponseBody::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LoginError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Success(_) => None,
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        match self.body {
            ResponseBody::Success(payload) => (self.status_code, Json(payload)).into_response(),
            ResponseBody::Error(error) => {
                let mut response = error.into_response();
                *response.status_mut() = self.status_code;
                response
            }
        }
    }
}
