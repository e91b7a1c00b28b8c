use axum::extract::{Path, State};
use devcamper_core::domain::bootcamp::{entities::Bootcamp, ports::BootcampService};
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
    path = "/{bootcamp_id}",
    tag = "bootcamp",
    summary = "Get bootcamp",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Bootcamp>),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn get_bootcamp(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DataResponse<Bootcamp>>, ApiError> {
    let bootcamp = state
        .service
        .get_bootcamp(bootcamp_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(bootcamp)))
}
