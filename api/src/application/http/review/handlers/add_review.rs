use axum::extract::{Path, State};
use devcamper_core::domain::review::{entities::Review, ports::ReviewService};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::CreateReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::{DataResponse, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/bootcamps/{bootcamp_id}/reviews",
    tag = "review",
    summary = "Add review",
    description = "One review per user and bootcamp. The bootcamp's average rating is recomputed.",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    request_body = CreateReviewValidator,
    responses(
        (status = 201, body = DataResponse<Review>),
        (status = 400, description = "Invalid payload or bootcamp already reviewed"),
        (status = 403, description = "Role not allowed"),
        (status = 404, description = "Bootcamp not found")
    ),
)]
pub async fn add_review(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateReviewValidator>,
) -> Result<Response<DataResponse<Review>>, ApiError> {
    let review = state
        .service
        .add_review(identity, bootcamp_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(DataResponse::new(review)))
}
