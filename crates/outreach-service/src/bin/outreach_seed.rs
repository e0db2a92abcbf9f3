use outreach_core::config::{Settings, load_config};
use outreach_db::db::DbProvider;
use outreach_db::db::connection::{SessionSettings, create_pool};
use outreach_db::db::migrations::run_pending_migrations;
use outreach_service::seed::{self, Fixture, PgSeedStore, SeedError, SeedReport};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

async fn seed_database(settings: &Settings) -> Result<SeedReport, SeedError> {
    run_pending_migrations(&settings.database.url)
        .await
        .map_err(SeedError::Connection)?;

    let session = SessionSettings::from(&settings.database);
    let pool = create_pool(&settings.database.url, 1, session)
        .await
        .map_err(SeedError::Connection)?;
    let conn = pool
        .get_connection()
        .await
        .map_err(|e| SeedError::Connection(e.into()))?;

    let mut store = PgSeedStore::new(conn);
    seed::run(&mut store, &Fixture::demo()).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let filter = EnvFilter::try_new(config.logging.level.as_str())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();

    match seed_database(&config).await {
        Ok(report) => {
            tracing::info!(
                companies = report.companies,
                methods = report.methods,
                communications = report.communications,
                notifications = report.notifications,
                "Seed data added successfully"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Error seeding data");
            Err(e.into())
        }
    }
}
