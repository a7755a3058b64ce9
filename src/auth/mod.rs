pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::models::User;

// Re-export necessary items
pub use extractors::CurrentSubject;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

/// Represents the payload for a user login request.
///
/// Submitted form-encoded; `username` carries the email address, matching the
/// OAuth2 password-flow field names.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// User's email address.
    pub username: String,
    /// User's password.
    pub password: String,
}

/// The bearer token returned after a successful login or registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed JWT for session authentication.
    pub access_token: String,
    /// Always "Bearer".
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}

/// Response structure after successful registration.
/// Contains the created user (without its password hash) and a token.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user: User,
    pub token: TokenResponse,
}
