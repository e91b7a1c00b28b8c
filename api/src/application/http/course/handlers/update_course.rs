use axum::extract::{Path, State};
use devcamper_core::domain::course::{entities::Course, ports::CourseService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::course::validators::UpdateCourseValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    tag = "course",
    summary = "Update course",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    request_body = UpdateCourseValidator,
    responses(
        (status = 200, body = DataResponse<Course>),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn update_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateCourseValidator>,
) -> Result<Response<DataResponse<Course>>, ApiError> {
    let course = state
        .service
        .update_course(identity, course_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(course)))
}
