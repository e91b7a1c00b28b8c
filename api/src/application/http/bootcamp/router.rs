use super::handlers::create_bootcamp::{__path_create_bootcamp, create_bootcamp};
use super::handlers::delete_bootcamp::{__path_delete_bootcamp, delete_bootcamp};
use super::handlers::get_bootcamp::{__path_get_bootcamp, get_bootcamp};
use super::handlers::get_bootcamps::{__path_get_bootcamps, get_bootcamps};
use super::handlers::update_bootcamp::{__path_update_bootcamp, update_bootcamp};
use crate::application::{
    auth::auth,
    http::{advanced_results::bootcamp_results, server::app_state::AppState},
};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_bootcamps,
    get_bootcamp,
    create_bootcamp,
    update_bootcamp,
    delete_bootcamp
))]
pub struct BootcampApiDoc;

pub fn bootcamp_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/bootcamps"),
            get(get_bootcamps).route_layer(middleware::from_fn_with_state(
                state.clone(),
                bootcamp_results,
            )),
        )
        .route(&format!("{root_path}/bootcamps"), post(create_bootcamp))
        .route(
            &format!("{root_path}/bootcamps/{{bootcamp_id}}"),
            get(get_bootcamp),
        )
        .route(
            &format!("{root_path}/bootcamps/{{bootcamp_id}}"),
            put(update_bootcamp),
        )
        .route(
            &format!("{root_path}/bootcamps/{{bootcamp_id}}"),
            delete(delete_bootcamp),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
