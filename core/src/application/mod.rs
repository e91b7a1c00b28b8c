use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{DevcamperConfig, services::Service},
    infrastructure::{
        bootcamp::repositories::bootcamp_repository::PostgresBootcampRepository,
        course::repositories::course_repository::PostgresCourseRepository,
        crypto::Argon2HasherRepository, health::PostgresHealthCheckRepository,
        jwt::JwtTokenRepository,
        review::repositories::review_repository::PostgresReviewRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

pub type DevcamperService = Service<
    PostgresBootcampRepository,
    PostgresCourseRepository,
    PostgresReviewRepository,
    PostgresUserRepository,
    Argon2HasherRepository,
    JwtTokenRepository,
    PostgresHealthCheckRepository,
>;

/// Wires every Postgres-backed repository around a shared connection.
pub fn create_service(config: &DevcamperConfig, db: DatabaseConnection) -> DevcamperService {
    Service::new(
        PostgresBootcampRepository::new(db.clone()),
        PostgresCourseRepository::new(db.clone()),
        PostgresReviewRepository::new(db.clone()),
        PostgresUserRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtTokenRepository::new(&config.auth),
        PostgresHealthCheckRepository::new(db),
    )
}
