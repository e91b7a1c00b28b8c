use axum::extract::{Path, State};
use devcamper_core::domain::user::ports::UserService;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{DataResponse, Empty, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "user",
    summary = "Delete user",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Empty>),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    ),
)]
pub async fn delete_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DataResponse<Empty>>, ApiError> {
    state
        .service
        .delete_user(identity, user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(Empty::default())))
}
