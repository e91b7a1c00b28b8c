use axum::extract::{Path, State};
use devcamper_core::domain::bootcamp::{entities::Bootcamp, ports::BootcampService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::bootcamp::validators::UpdateBootcampValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/{bootcamp_id}",
    tag = "bootcamp",
    summary = "Update bootcamp",
    description = "Partially updates a bootcamp. Only its owner or an admin may do so; renaming also changes the slug.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    request_body = UpdateBootcampValidator,
    responses(
        (status = 200, body = DataResponse<Bootcamp>),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn update_bootcamp(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateBootcampValidator>,
) -> Result<Response<DataResponse<Bootcamp>>, ApiError> {
    let bootcamp = state
        .service
        .update_bootcamp(identity, bootcamp_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(bootcamp)))
}
