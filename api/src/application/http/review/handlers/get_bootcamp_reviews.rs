use axum::extract::{Path, State};
use devcamper_core::domain::review::ports::ReviewService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{CountedList, DataResponse, ListingResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/bootcamps/{bootcamp_id}/reviews",
    tag = "review",
    summary = "List reviews of a bootcamp",
    params(
        ("bootcamp_id" = Uuid, Path, description = "Bootcamp ID"),
    ),
    responses(
        (status = 200, body = ListingResponse)
    ),
)]
pub async fn get_bootcamp_reviews(
    Path(bootcamp_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DataResponse<CountedList>>, ApiError> {
    let reviews = state
        .service
        .get_bootcamp_reviews(bootcamp_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DataResponse::new(CountedList::new(
        "reviews", reviews,
    ))))
}
