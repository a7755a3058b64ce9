//!
//! # Auth Flow
//!
//! Stateless orchestration of registration, login, and current-user
//! resolution over the identity store, password vault, and token service.
//! All validation happens before any store write, so a failed registration
//! never leaves a partial user behind.

use crate::auth::{hash_password, verify_password, SignupResponse, TokenResponse};
use crate::error::AppError;
use crate::models::{SignupRequest, User};
use crate::state::AppState;
use crate::store::IdentityStore;

/// Registers a new user and returns the created record plus a bearer token.
///
/// Checks, in order: name non-empty after trimming, passwords match, email not
/// already in use. Only when all three pass does the password get hashed and
/// the user created.
pub async fn register(state: &AppState, input: SignupRequest) -> Result<SignupResponse, AppError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("The name can't be empty".into()));
    }

    if input.password != input.repeat_password {
        return Err(AppError::Validation("The passwords don't match".into()));
    }

    if state.users.find_by_email(&input.email).await?.is_some() {
        return Err(AppError::Validation("The email is already in use".into()));
    }

    let password_hash = hash_password(&input.password)?;
    let user = state
        .users
        .create(name, &input.email, &password_hash)
        .await?;

    let token = state.tokens.issue(&user.email)?;

    Ok(SignupResponse {
        user,
        token: TokenResponse::bearer(token),
    })
}

/// Authenticates a user and returns a bearer token.
///
/// An unknown email and a wrong password both answer with the same message and
/// status so that login responses can't be used to enumerate accounts.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<TokenResponse, AppError> {
    let user = state.users.find_by_email(email).await?;

    match user {
        Some(user) if verify_password(password, &user.password_hash) => {
            let token = state.tokens.issue(&user.email)?;
            Ok(TokenResponse::bearer(token))
        }
        _ => Err(AppError::Unauthorized("Email or password is invalid".into())),
    }
}

/// Resolves a verified token subject to the full user record.
///
/// The middleware has already verified the token signature and expiry; this
/// only has to look the subject up. A subject with no matching user (deleted
/// account, foreign token) is rejected the same way a bad token would be.
pub async fn resolve_current_user(state: &AppState, subject: &str) -> Result<User, AppError> {
    state
        .users
        .find_by_email(subject)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::store::{MemoryIdentityStore, MemoryTaskStore};
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(MemoryIdentityStore::new()),
            Arc::new(MemoryTaskStore::new()),
            TokenService::new("test-secret", 30),
        )
    }

    fn signup(name: &str, email: &str, password: &str, repeat: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            repeat_password: repeat.to_string(),
        }
    }

    #[actix_rt::test]
    async fn test_register_trims_name_and_issues_token() {
        let state = test_state();

        let response = register(&state, signup(" Alice ", "a@x.com", "password1", "password1"))
            .await
            .expect("registration should succeed");

        assert_eq!(response.user.name, "Alice");
        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(response.token.token_type, "Bearer");

        // The issued token resolves back to the created user
        let subject = state.tokens.verify(&response.token.access_token).unwrap();
        let user = resolve_current_user(&state, &subject).await.unwrap();
        assert_eq!(user.id, response.user.id);
    }

    #[actix_rt::test]
    async fn test_register_rejects_empty_name() {
        let state = test_state();

        let result = register(&state, signup("   ", "a@x.com", "password1", "password1")).await;
        match result {
            Err(AppError::Validation(_)) => {}
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert!(state.users.find_by_email("a@x.com").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_register_password_mismatch_writes_nothing() {
        let state = test_state();

        let result = register(&state, signup("Alice", "a@x.com", "password1", "password2")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        // No partial user was created
        assert!(state.users.find_by_email("a@x.com").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_register_duplicate_email_rejected() {
        let state = test_state();

        register(&state, signup("Alice", "a@x.com", "password1", "password1"))
            .await
            .unwrap();

        let result = register(&state, signup("Mallory", "a@x.com", "password2", "password2")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        // Still exactly the original user behind that email
        let user = state.users.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[actix_rt::test]
    async fn test_login_success_and_failure_modes() {
        let state = test_state();
        register(&state, signup("Alice", "a@x.com", "password1", "password1"))
            .await
            .unwrap();

        let token = login(&state, "a@x.com", "password1")
            .await
            .expect("login should succeed");
        assert_eq!(state.tokens.verify(&token.access_token).unwrap(), "a@x.com");

        // Wrong password and unknown email are indistinguishable
        let wrong_password = login(&state, "a@x.com", "nope-wrong").await.unwrap_err();
        let unknown_email = login(&state, "ghost@x.com", "password1").await.unwrap_err();
        match (&wrong_password, &unknown_email) {
            (AppError::Unauthorized(a), AppError::Unauthorized(b)) => assert_eq!(a, b),
            other => panic!("Expected two Unauthorized errors, got {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn test_resolve_current_user_unknown_subject() {
        let state = test_state();

        let result = resolve_current_user(&state, "ghost@x.com").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
