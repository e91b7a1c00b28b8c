use axum::extract::State;
use devcamper_core::domain::{authentication::ports::AuthService, user::entities::User};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = DataResponse<User>),
        (status = 401, description = "Missing or invalid token")
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DataResponse<User>>, ApiError> {
    let user = state
        .service
        .get_me(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(user)))
}
