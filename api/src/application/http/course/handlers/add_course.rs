use axum::extract::{Path, State};
use devcamper_core::domain::course::{entities::Course, ports::CourseService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::course::validators::CreateCourseValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/bootcamps/{bootcamp_id}/courses",
    tag = "course",
    summary = "Add course",
    description = "Adds a course to a bootcamp owned by the caller (admins may add to any bootcamp). The bootcamp's average cost is recomputed.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    request_body = CreateCourseValidator,
    responses(
        (status = 201, body = DataResponse<Course>),
        (status = 403, description = "Caller does not own the bootcamp"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn add_course(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCourseValidator>,
) -> Result<Response<DataResponse<Course>>, ApiError> {
    let course = state
        .service
        .add_course(identity, bootcamp_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DataResponse::new(course)))
}
