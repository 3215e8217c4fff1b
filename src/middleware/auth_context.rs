use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};

use crate::error::ApiError;
use crate::middleware::auth::Claims;

/// The account behind a request that passed [`AuthMiddleware`].
///
/// [`AuthMiddleware`]: crate::middleware::auth::AuthMiddleware
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<Claims>().map(|claims| AuthenticatedUser {
            user_id: claims.user_id.clone(),
            email: claims.sub.clone(),
        });
        ready(user.ok_or_else(|| ApiError::Unauthorized("User not authenticated".to_string()).into()))
    }
}
