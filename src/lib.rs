// Library crate for the login request router
// This file exposes the public API for transports and integration tests

pub mod login;
pub mod shared;
pub mod telemetry;

// Re-export commonly used types for easier access in tests
pub use login::{
    AccessTokenResponse, Authenticator, CollaboratorError, EmailValidator, HttpRequest,
    HttpResponse, LoginRequestBody, LoginRouter, LoginRouterBuilder, ResponseBody,
};
pub use shared::LoginError;
