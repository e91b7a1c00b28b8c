use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{
    api_error::ApiError,
    response::{DataResponse, Response},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveStatus {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = DataResponse<LiveStatus>)
    ),
)]
pub async fn live() -> Result<Response<DataResponse<LiveStatus>>, ApiError> {
    Ok(Response::OK(DataResponse::new(LiveStatus {
        status: "ok".to_string(),
    })))
}
