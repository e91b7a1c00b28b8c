use crate::application::http::{
    authentication::router::AuthenticationApiDoc, bootcamp::router::BootcampApiDoc,
    course::router::CourseApiDoc, health::router::HealthApiDoc, review::router::ReviewApiDoc,
    user::router::UserApiDoc,
};
use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DevCamper API",
        description = "Bootcamp directory: bootcamps, courses, reviews and users."
    ),
    nest(
        (path = "/bootcamps", api = BootcampApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document. Course and review paths span `/bootcamps/{id}/...` and
/// their own prefix, so they are merged rather than nested.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(CourseApiDoc::openapi());
    openapi.merge(ReviewApiDoc::openapi());

    let components = openapi.components.get_or_insert_with(Default::default);
    components.add_security_scheme(
        "bearer",
        SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
    );

    openapi
}
