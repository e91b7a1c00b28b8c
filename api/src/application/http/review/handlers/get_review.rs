use axum::extract::{Path, State};
use devcamper_core::domain::review::{entities::Review, ports::ReviewService};
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
    path = "/reviews/{review_id}",
    tag = "review",
    summary = "Get review",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Review>),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn get_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DataResponse<Value>>, ApiError> {
    let review = state
        .service
        .get_review(review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(review)))
}
