use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error descriptors returned in the body of a failed login response.
///
/// Compared structurally: two `MissingParam("email")` values are equal no
/// matter where they were produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error")]
    Server,
}

impl LoginError {
    pub fn missing_param(param: impl Into<String>) -> Self {
        LoginError::MissingParam(param.into())
    }

    pub fn invalid_param(param: impl Into<String>) -> Self {
        LoginError::InvalidParam(param.into())
    }

    /// Fixed HTTP status for each error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            LoginError::MissingParam(_) | LoginError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            LoginError::Unauthorized => StatusCode::UNAUTHORIZED,
            LoginError::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
