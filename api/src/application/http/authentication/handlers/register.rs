use axum::extract::State;
use devcamper_core::domain::authentication::{ports::AuthService, value_objects::AuthToken};

use crate::application::http::authentication::validators::RegisterValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register",
    description = "Creates an account and returns a bearer token. The admin role can not be requested.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = DataResponse<AuthToken>),
        (status = 400, description = "Invalid payload or email already registered")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<DataResponse<AuthToken>>, ApiError> {
    let token = state
        .service
        .register(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DataResponse::new(token)))
}
