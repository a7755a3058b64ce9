use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::extractors::CurrentSubject;
use crate::error::AppError;
use crate::state::AppState;

/// Bearer-token middleware guarding every endpoint except the public ones.
///
/// On success the verified subject (the user's email) is inserted into request
/// extensions for the `CurrentSubject` extractor; resolving the subject to a
/// full user record happens later, in the service layer.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Skip authentication for the health check and for signup/login
        let path = req.path();
        if path == "/health"
            || path.starts_with("/users/signup")
            || path.starts_with("/users/login")
        {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let auth_header = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let tokens = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.tokens.clone(),
            None => {
                let app_err = AppError::Internal("Application state not configured".into());
                return Box::pin(async move { Err(app_err.into()) });
            }
        };

        match auth_header {
            Some(token) => match tokens.verify(token) {
                Ok(subject) => {
                    req.extensions_mut().insert(CurrentSubject(subject));
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => Box::pin(async move { Err(app_err.into()) }),
            },
            None => {
                let app_err = AppError::Unauthorized("Missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
