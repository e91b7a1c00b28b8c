use axum::extract::State;
use devcamper_core::domain::bootcamp::{entities::Bootcamp, ports::BootcampService};

use crate::application::auth::RequiredIdentity;
use crate::application::http::bootcamp::validators::CreateBootcampValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "bootcamp",
    summary = "Create bootcamp",
    description = "Creates a bootcamp owned by the caller. Publishers may own a single bootcamp; admins are not limited.",
    request_body = CreateBootcampValidator,
    responses(
        (status = 201, body = DataResponse<Bootcamp>),
        (status = 400, description = "Invalid payload, duplicate name or bootcamp already published"),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Role not allowed")
    ),
)]
pub async fn create_bootcamp(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateBootcampValidator>,
) -> Result<Response<DataResponse<Bootcamp>>, ApiError> {
    let bootcamp = state
        .service
        .create_bootcamp(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DataResponse::new(bootcamp)))
}
