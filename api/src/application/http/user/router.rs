use super::handlers::create_user::{__path_create_user, create_user};
use super::handlers::delete_user::{__path_delete_user, delete_user};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_users::{__path_get_users, get_users};
use super::handlers::update_user::{__path_update_user, update_user};
use crate::application::{
    auth::auth,
    http::{advanced_results::user_results, server::app_state::AppState},
};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, get_user, create_user, update_user, delete_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/users"),
            get(get_users).route_layer(middleware::from_fn_with_state(
                state.clone(),
                user_results,
            )),
        )
        .route(&format!("{root_path}/users"), post(create_user))
        .route(&format!("{root_path}/users/{{user_id}}"), get(get_user))
        .route(&format!("{root_path}/users/{{user_id}}"), put(update_user))
        .route(
            &format!("{root_path}/users/{{user_id}}"),
            delete(delete_user),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
