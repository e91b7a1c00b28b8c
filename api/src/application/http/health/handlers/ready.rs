use axum::extract::State;
use devcamper_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the database and reports the round-trip latency.",
    responses(
        (status = 200, body = DataResponse<DatabaseHealthStatus>),
        (status = 500, description = "Database unreachable")
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<DataResponse<DatabaseHealthStatus>>, ApiError> {
    let status = state
        .service
        .readiness()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(status)))
}
