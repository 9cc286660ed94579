use std::{io::Error, sync::Arc};

use campus::{
    application::campus_app::CampusApp,
    config::Config,
    infrastructure::{
        email::LoggingEmailService,
        repositories::{PostgresUsersRepository, postgres},
    },
    presentation::http::routes,
};
use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn build_production_app(config: &Config) -> anyhow::Result<CampusApp> {
    let pool = postgres::connect(config).await?;
    let users_repo = PostgresUsersRepository::new(pool);
    Ok(CampusApp::new(users_repo, LoggingEmailService::new()))
}

#[main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = Config::try_parse().map_err(Error::other)?;
    let campus = build_production_app(&config)
        .await
        .map_err(|err| Error::other(format!("{err:#}")))?;

    let server_url = config.server_url();
    tracing::info!(%server_url, "starting campus server");

    let app = routes(Arc::new(campus), &server_url);
    Server::new(TcpListener::bind(format!("0.0.0.0:{}", config.port)))
        .run(app)
        .await
}
