use axum::extract::{Path, State};
use devcamper_core::domain::course::ports::CourseService;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{DataResponse, Empty, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = "course",
    summary = "Delete course",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Empty>),
        (status = 403, description = "Caller is neither owner nor admin"),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn delete_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DataResponse<Empty>>, ApiError> {
    state
        .service
        .delete_course(identity, course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(Empty::default())))
}
