use axum::extract::State;
use devcamper_core::domain::user::{entities::User, ports::UserService};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::CreateUserValidator;

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create user",
    request_body = CreateUserValidator,
    responses(
        (status = 201, body = DataResponse<User>),
        (status = 400, description = "Invalid payload or email already registered"),
        (status = 403, description = "Caller is not an admin")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<DataResponse<User>>, ApiError> {
    let user = state
        .service
        .create_user(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DataResponse::new(user)))
}
