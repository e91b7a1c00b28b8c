use axum::extract::{Path, State};
use devcamper_core::domain::course::ports::CourseService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{CountedList, DataResponse, ListingResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/bootcamps/{bootcamp_id}/courses",
    tag = "course",
    summary = "List courses of a bootcamp",
    description = "Every course of one bootcamp, unpaginated: `{count, courses}`.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = ListingResponse)
    ),
)]
pub async fn get_bootcamp_courses(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DataResponse<CountedList>>, ApiError> {
    let courses = state
        .service
        .get_bootcamp_courses(bootcamp_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(CountedList::new(
        "courses", courses,
    ))))
}
