use super::handlers::add_course::{__path_add_course, add_course};
use super::handlers::delete_course::{__path_delete_course, delete_course};
use super::handlers::get_bootcamp_courses::{__path_get_bootcamp_courses, get_bootcamp_courses};
use super::handlers::get_course::{__path_get_course, get_course};
use super::handlers::get_courses::{__path_get_courses, get_courses};
use super::handlers::update_course::{__path_update_course, update_course};
use crate::application::{
    auth::auth,
    http::{advanced_results::course_results, server::app_state::AppState},
};

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_courses,
    get_bootcamp_courses,
    get_course,
    add_course,
    update_course,
    delete_course
))]
pub struct CourseApiDoc;

pub fn course_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/courses"),
            get(get_courses).route_layer(middleware::from_fn_with_state(
                state.clone(),
                course_results,
            )),
        )
        .route(
            &format!("{root_path}/bootcamps/{{bootcamp_id}}/courses"),
            get(get_bootcamp_courses),
        )
        .route(
            &format!("{root_path}/bootcamps/{{bootcamp_id}}/courses"),
            post(add_course),
        )
        .route(
            &format!("{root_path}/courses/{{course_id}}"),
            get(get_course),
        )
        .route(
            &format!("{root_path}/courses/{{course_id}}"),
            put(update_course),
        )
        .route(
            &format!("{root_path}/courses/{{course_id}}"),
            delete(delete_course),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
