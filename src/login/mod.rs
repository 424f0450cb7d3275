// Public API - what other modules can use
pub use collaborators::{Authenticator, CollaboratorError, EmailValidator};
pub use router::{LoginRouter, LoginRouterBuilder};
pub use types::{AccessTokenResponse, HttpRequest, HttpResponse, LoginRequestBody, ResponseBody};

// Internal modules
mod collaborators;
mod router;
mod types;
