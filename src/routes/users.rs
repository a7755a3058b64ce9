use crate::{auth::LoginForm, error::AppError, models::SignupRequest, services, state::AppState};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns the created user (without its
/// password hash) together with an authentication token.
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    signup_data.validate()?;

    let response = services::users::register(&state, signup_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// Login user
///
/// Authenticates a user from a form-encoded body (`username` is the email,
/// OAuth2 password-flow style) and returns a bearer token.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<impl Responder, AppError> {
    let token = services::users::login(&state, &form.username, &form.password).await?;

    Ok(HttpResponse::Ok().json(token))
}
