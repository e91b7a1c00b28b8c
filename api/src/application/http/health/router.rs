use super::handlers::live::{__path_live, live};
use super::handlers::ready::{__path_ready, ready};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health/live"), get(live))
        .route(&format!("{root_path}/health/ready"), get(ready))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn liveness_needs_no_state() {
        let app = Router::new().route("/health/live", get(live));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health/live").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "success": true,
            "data": { "status": "ok" }
        }));
    }
}
