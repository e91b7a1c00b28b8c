use axum::extract::{Path, State};
use devcamper_core::domain::review::ports::ReviewService;
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::{DataResponse, Empty, Response};
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/reviews/{review_id}",
    tag = "review",
    summary = "Delete review",
    params(
        ("review_id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = DataResponse<Empty>),
        (status = 403, description = "Caller is neither author nor admin"),
        (status = 404, description = "Review not found")
    ),
)]
pub async fn delete_review(
    Path(review_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DataResponse<Empty>>, ApiError> {
    state
        .service
        .delete_review(identity, review_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(Empty::default())))
}
