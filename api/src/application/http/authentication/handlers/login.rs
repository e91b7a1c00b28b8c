use axum::extract::State;
use devcamper_core::domain::authentication::{ports::AuthService, value_objects::AuthToken};

use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Login",
    request_body = LoginValidator,
    responses(
        (status = 200, body = DataResponse<AuthToken>),
        (status = 400, description = "Email or password missing"),
        (status = 401, description = "Invalid credentials")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<DataResponse<AuthToken>>, ApiError> {
    let token = state
        .service
        .login(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(token)))
}
