use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::domain::common::DevcamperConfig;

/// Database handle owned by the application. Created once at startup,
/// migrated, handed to every repository and closed on shutdown.
#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: &DevcamperConfig) -> Result<Self, anyhow::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&config.database.url())
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!(
            host = %config.database.host,
            database = %config.database.name,
            "connected to postgres, migrations applied"
        );

        Ok(Self {
            db: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub async fn close(self) -> Result<(), anyhow::Error> {
        self.db.close().await?;
        info!("postgres connection closed");
        Ok(())
    }
}
