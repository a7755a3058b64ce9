use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A registered user as stored in the database.
///
/// The password hash is part of the record but is never serialized, so any
/// `User` returned from a handler is safe to send to clients as-is.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Payload for registering a new account.
///
/// The name is only checked for emptiness after trimming, which happens in the
/// registration flow rather than here.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    pub name: String,
    /// Must be a valid email format; doubles as the login handle.
    #[validate(email)]
    pub email: String,
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
    pub repeat_password: String,
}
