use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use devcamper_core::{
    application::create_service, domain::common::DevcamperConfig,
    infrastructure::db::postgres::Postgres,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info_span, warn};
use utoipa::openapi::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    authentication::router::authentication_routes,
    bootcamp::router::bootcamp_routes,
    course::router::course_routes,
    health::router::health_routes,
    review::router::review_routes,
    server::{app_state::AppState, openapi::api_doc},
    user::router::user_routes,
};
use crate::args::{Args, ServerArgs};

/// Builds the application state around an already migrated database handle.
pub fn state(args: Arc<Args>, postgres: &Postgres) -> AppState {
    let config = DevcamperConfig::from(args.as_ref().clone());
    let service = create_service(&config, postgres.get_db());

    AppState::new(args, service)
}

fn cors(server: &ServerArgs) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|err| warn!("skipping allowed origin {origin:?}: {err}"))
                .ok()
        })
        .collect();
    debug!(?origins, "cors origins");

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true)
}

/// Serves the OpenAPI document under `{root_path}/api-docs/openapi.json`
/// with four viewers next to it.
fn docs(root_path: &str) -> Router<AppState> {
    let mut openapi: OpenApi = api_doc();
    openapi.paths.paths = std::mem::take(&mut openapi.paths.paths)
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();

    let spec_url = format!("{root_path}/api-docs/openapi.json");

    Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(spec_url.clone(), openapi.clone()))
        .merge(Scalar::with_url(format!("{root_path}/scalar"), openapi.clone()))
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(spec_url).path(format!("{root_path}/rapidoc")))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let root_path = state.args.server.root_path.clone();

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
        )
    });
    let (metrics, metric_handle) = PrometheusMetricLayer::pair();

    let router = Router::new()
        .merge(docs(&root_path))
        .merge(bootcamp_routes(state.clone()))
        .merge(course_routes(state.clone()))
        .merge(review_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(authentication_routes(state.clone()))
        .merge(health_routes(&root_path))
        .route(
            &format!("{root_path}/metrics"),
            get(move || async move { metric_handle.render() }),
        )
        .layer(trace)
        .layer(cors(&state.args.server))
        .layer(metrics)
        .with_state(state);

    Ok(router)
}
