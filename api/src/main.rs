use std::sync::Arc;

use clap::Parser;
use devcamper_core::{
    domain::common::DevcamperConfig,
    infrastructure::{db::postgres::Postgres, seeder::Seeder},
};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::http::server::http_server::{router, state};
use crate::args::{Args, Command, LogArgs, SeedAction};

mod application;
mod args;

fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_new(&args.filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {:?}: {err}, falling back to info", args.filter);
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::registry().with(filter);
    if args.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

async fn serve(args: Arc<Args>, postgres: &Postgres) -> Result<(), anyhow::Error> {
    let app_state = state(args.clone(), postgres);
    let app = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, root_path = %args.server.root_path, "devcamper-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn seed(action: &SeedAction, postgres: &Postgres) -> Result<(), anyhow::Error> {
    let seeder = Seeder::new(postgres.get_db());

    match action {
        SeedAction::Import { dir } => {
            let report = seeder.import(dir).await?;
            info!(
                users = report.users,
                bootcamps = report.bootcamps,
                courses = report.courses,
                reviews = report.reviews,
                "data imported"
            );
        }
        SeedAction::Destroy => {
            seeder.destroy().await?;
            info!("data destroyed");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let config = DevcamperConfig::from(args.as_ref().clone());
    let postgres = Postgres::new(&config).await?;

    let outcome = match &args.command {
        None | Some(Command::Serve) => serve(args.clone(), &postgres).await,
        Some(Command::Seed { action }) => seed(action, &postgres).await,
    };

    postgres.close().await?;
    outcome
}
