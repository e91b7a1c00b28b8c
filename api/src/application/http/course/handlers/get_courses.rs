use axum::Extension;
use devcamper_core::domain::advanced_results::value_objects::ResultEnvelope;

use crate::application::http::server::api_entities::{
    api_error::ApiError,
    response::{ListingResponse, Response},
};

#[utoipa::path(
    get,
    path = "/courses",
    tag = "course",
    summary = "List courses",
    description = "Lists courses, each with its bootcamp's name and description.",
    params(crate::application::http::query_extractor::ListingParams),
    responses(
        (status = 200, body = ListingResponse)
    ),
)]
pub async fn get_courses(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}
