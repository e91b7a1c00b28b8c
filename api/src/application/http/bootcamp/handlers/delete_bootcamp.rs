use axum::extract::{Path, State};
use devcamper_core::domain::bootcamp::ports::BootcampService;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{DataResponse, Empty, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{bootcamp_id}",
    tag = "bootcamp",
    summary = "Delete bootcamp",
    description = "Deletes a bootcamp together with its courses and reviews.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Empty>),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn delete_bootcamp(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DataResponse<Empty>>, ApiError> {
    state
        .service
        .delete_bootcamp(identity, bootcamp_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(Empty::default())))
}
