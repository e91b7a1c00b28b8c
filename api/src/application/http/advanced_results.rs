//! Listing middleware. Each function runs the list-query engine for one
//! resource and leaves the [`ResultEnvelope`] in the request extensions,
//! where the route handler picks it up with `Extension<ResultEnvelope>`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use devcamper_core::domain::{
    advanced_results::value_objects::ResultEnvelope, bootcamp::ports::BootcampService,
    course::ports::CourseService, review::ports::ReviewService, user::ports::UserService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        query_extractor::QueryRequestExtractor,
        server::{api_entities::api_error::ApiError, app_state::AppState},
    },
};

async fn forward(envelope: ResultEnvelope, mut req: Request, next: Next) -> Response {
    req.extensions_mut().insert(envelope);
    next.run(req).await
}

pub async fn bootcamp_results(
    State(state): State<AppState>,
    QueryRequestExtractor(query): QueryRequestExtractor,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let envelope = state.service.get_bootcamps(query).await?;
    Ok(forward(envelope, req, next).await)
}

pub async fn course_results(
    State(state): State<AppState>,
    QueryRequestExtractor(query): QueryRequestExtractor,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let envelope = state.service.get_courses(query).await?;
    Ok(forward(envelope, req, next).await)
}

pub async fn review_results(
    State(state): State<AppState>,
    QueryRequestExtractor(query): QueryRequestExtractor,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let envelope = state.service.get_reviews(query).await?;
    Ok(forward(envelope, req, next).await)
}

/// Admin-only; runs after [`crate::application::auth::auth`].
pub async fn user_results(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    QueryRequestExtractor(query): QueryRequestExtractor,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let envelope = state.service.get_users(identity, query).await?;
    Ok(forward(envelope, req, next).await)
}

#[cfg(test)]
mod tests {
    use axum::{Extension, Router, middleware, routing::get};
    use axum_test::TestServer;
    use devcamper_core::{
        domain::advanced_results::{services::advanced_results, value_objects::Populate},
        infrastructure::memory::{InMemoryCollection, InMemoryRelation},
    };
    use serde_json::json;

    use super::*;
    use crate::application::http::server::api_entities::response::Response as ApiResponse;

    fn courses() -> InMemoryCollection {
        let bootcamps = vec![
            json!({"id": "b1", "name": "Devworks", "description": "Full stack", "housing": true}),
        ];
        InMemoryCollection::new(
            "Course",
            vec![
                json!({"id": "c1", "title": "Front End", "tuition": 8000, "bootcamp_id": "b1", "created_at": "2024-01-01T00:00:00Z"}),
                json!({"id": "c2", "title": "Full Stack", "tuition": 12000, "bootcamp_id": "b1", "created_at": "2024-01-02T00:00:00Z"}),
                json!({"id": "c3", "title": "UI/UX", "tuition": 9000, "bootcamp_id": "b1", "created_at": "2024-01-03T00:00:00Z"}),
            ],
        )
        .with_relation("bootcamp", InMemoryRelation::one("bootcamp_id", "id", bootcamps))
    }

    async fn in_memory_results(
        QueryRequestExtractor(query): QueryRequestExtractor,
        req: Request,
        next: Next,
    ) -> Result<Response, ApiError> {
        let populate = Populate::with_select("bootcamp", &["name", "description"]);
        let envelope = advanced_results(&courses(), query, Some(populate)).await?;
        Ok(forward(envelope, req, next).await)
    }

    async fn list(Extension(envelope): Extension<ResultEnvelope>) -> ApiResponse<ResultEnvelope> {
        ApiResponse::OK(envelope)
    }

    fn server() -> TestServer {
        let app = Router::new().route(
            "/courses",
            get(list).layer(middleware::from_fn(in_memory_results)),
        );
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn handler_emits_the_envelope_left_by_the_middleware() {
        let response = server()
            .get("/courses?tuition%5Bgte%5D=9000&sort=tuition&limit=1")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "data": {
                "count": 1,
                "pagination": { "next": 2, "limit": 1 },
                "course": [{
                    "id": "c3",
                    "title": "UI/UX",
                    "tuition": 9000,
                    "bootcamp_id": "b1",
                    "created_at": "2024-01-03T00:00:00Z",
                    "bootcamp": { "id": "b1", "name": "Devworks", "description": "Full stack" }
                }]
            }
        }));
    }

    #[tokio::test]
    async fn unparseable_controls_fall_back_to_defaults() {
        let response = server().get("/courses?page=abc&limit=-3").await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["count"], 3);
        assert_eq!(body["data"]["pagination"], json!({ "limit": 25 }));
        assert_eq!(body["data"]["course"][0]["id"], "c3");
    }
}
