use axum::Extension;
use devcamper_core::domain::advanced_results::value_objects::ResultEnvelope;

use crate::application::http::server::api_entities::{
    api_error::ApiError,
    response::{ListingResponse, Response},
};

#[utoipa::path(
    get,
    path = "",
    tag = "bootcamp",
    summary = "List bootcamps",
    description = "Lists bootcamps with their courses. Supports `select`, `sort`, `page`, `limit` and field filters such as `average_cost[lte]=10000` or `careers[in]=Business,UI/UX`.",
    params(crate::application::http::query_extractor::ListingParams),
    responses(
        (status = 200, body = ListingResponse)
    ),
)]
pub async fn get_bootcamps(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}
