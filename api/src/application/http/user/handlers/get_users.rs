use axum::Extension;
use devcamper_core::domain::advanced_results::value_objects::ResultEnvelope;

use crate::application::http::server::api_entities::{
    api_error::ApiError,
    response::{ListingResponse, Response},
};

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "List users",
    description = "Admin only. Password hashes are never returned.",
    params(crate::application::http::query_extractor::ListingParams),
    responses(
        (status = 200, body = ListingResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
)]
pub async fn get_users(
    Extension(envelope): Extension<ResultEnvelope>,
) -> Result<Response<ResultEnvelope>, ApiError> {
    Ok(Response::OK(envelope))
}
