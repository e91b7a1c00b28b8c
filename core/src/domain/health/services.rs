use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
};

impl<B, C, R, U, H, T, HC> HealthCheckService for Service<B, C, R, U, H, T, HC>
where
    B: Send + Sync,
    C: Send + Sync,
    R: Send + Sync,
    U: Send + Sync,
    H: Send + Sync,
    T: Send + Sync,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
