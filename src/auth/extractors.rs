use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// Extracts the authenticated subject (the token's email claim) from request
/// extensions.
///
/// This extractor is intended to be used on routes protected by `AuthMiddleware`,
/// which validates the bearer token and inserts the verified subject into
/// request extensions. If the subject is missing (middleware not applied, or an
/// internal logic error after auth), the extractor returns `Unauthorized`.
#[derive(Debug, Clone)]
pub struct CurrentSubject(pub String);

impl FromRequest for CurrentSubject {
    type Error = ActixError; // AppError converts into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<CurrentSubject>().cloned() {
            Some(subject) => ready(Ok(subject)),
            None => {
                let err = AppError::Unauthorized(
                    "Subject not found in request. Ensure AuthMiddleware is active.".to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
