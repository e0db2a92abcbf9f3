use outreach_app::app::api::routes;
use outreach_app::db_handler::DbProviderHandler;
use outreach_core::config::load_config;
use outreach_db::db::connection::{SessionSettings, create_pool};
use outreach_db::db::migrations::run_pending_migrations;
use salvo::conn::TcpListener;
use salvo::cors::{Any, Cors};
use salvo::logging::Logger;
use salvo::{Listener, Router, Service};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting outreach server");

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    run_pending_migrations(&config.database.url).await?;

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
        SessionSettings::from(&config.database),
    )
    .await?;

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(DbProviderHandler { provider: pool })
        .push(routes());

    let cors = Cors::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .into_handler();

    let service = Service::new(router).hoop(Logger::new()).hoop(cors);

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(service).await;

    Ok(())
}
