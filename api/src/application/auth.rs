use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use devcamper_core::domain::authentication::{ports::AuthService, value_objects::Identity};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const NOT_AUTHORIZED: &str = "Not authorized to access this route";

/// Resolves a bearer token, when one is sent, into an [`Identity`] stored in
/// the request extensions. Requests without a usable token pass through
/// anonymously; handlers that need a caller ask for [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_string())
        .filter(|token| !token.is_empty());

    if let Some(token) = token {
        match state.service.authenticate(token).await {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(err) => debug!("bearer token rejected: {err}"),
        }
    }

    next.run(req).await
}

/// Caller identity placed by [`auth`]; rejects with 401 when absent.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized(NOT_AUTHORIZED.to_string()))
    }
}
