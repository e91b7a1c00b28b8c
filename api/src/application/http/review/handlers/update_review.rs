use axum::extract::{Path, State};
use devcamper_core::domain::review::{entities::Review, ports::ReviewService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::UpdateReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/reviews/{review_id}",
    tag = "review",
    summary = "Update review",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    request_body = UpdateReviewValidator,
    responses(
        (status = 200, body = DataResponse<Review>),
        (status = 403, description = "Caller is neither author nor admin"),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn update_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateReviewValidator>,
) -> Result<Response<DataResponse<Review>>, ApiError> {
    let review = state
        .service
        .update_review(identity, review_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(review)))
}
