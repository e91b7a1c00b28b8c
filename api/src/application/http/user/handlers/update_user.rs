use axum::extract::{Path, State};
use devcamper_core::domain::user::{entities::User, ports::UserService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::UpdateUserValidator;

#[utoipa::path(
    put,
    path = "/{user_id}",
    tag = "user",
    summary = "Update user",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    request_body = UpdateUserValidator,
    responses(
        (status = 200, body = DataResponse<User>),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn update_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateUserValidator>,
) -> Result<Response<DataResponse<User>>, ApiError> {
    let user = state
        .service
        .update_user(identity, user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(user)))
}
