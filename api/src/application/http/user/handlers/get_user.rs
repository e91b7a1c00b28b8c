use axum::extract::{Path, State};
use devcamper_core::domain::user::{entities::User, ports::UserService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = DataResponse<User>),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DataResponse<User>>, ApiError> {
    let user = state
        .service
        .get_user(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(user)))
}
