use axum::extract::{Path, State};
use devcamper_core::domain::course::{entities::Course, ports::CourseService};
use serde_json::Value;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = "course",
    summary = "Get course",
    description = "A single course with `bootcamp: {id, name, description}` inlined.",
    params(
        ("course_id" = Uuid, Path, description = "Course ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Course>),
        (status = 404, description = "Course not found")
    ),
)]
pub async fn get_course(
    Path(course_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DataResponse<Value>>, ApiError> {
    let course = state
        .service
        .get_course(course_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(course)))
}
