use std::future::Future;
use std::pin::Pin;

use diesel::{ConnectionError, ConnectionResult};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::{AsyncConnection, AsyncPgConnection, SimpleAsyncConnection};
use outreach_core::config::{DatabaseConfig, SynchronousCommit};

use crate::db::DbProvider;
use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

type SetupFuture<'a> =
    Pin<Box<dyn Future<Output = ConnectionResult<AsyncPgConnection>> + Send + 'a>>;

/// Session parameters applied to every connection the pool opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub synchronous_commit: SynchronousCommit,
    pub statement_timeout_ms: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            synchronous_commit: SynchronousCommit::On,
            statement_timeout_ms: 1000,
        }
    }
}

impl From<&DatabaseConfig> for SessionSettings {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            synchronous_commit: config.synchronous_commit,
            statement_timeout_ms: config.statement_timeout_ms,
        }
    }
}

impl SessionSettings {
    /// ## Summary
    /// The `SET` batch run on a freshly established connection.
    #[must_use]
    pub fn statements(&self) -> String {
        format!(
            "SET synchronous_commit = '{}'; SET statement_timeout = {}",
            self.synchronous_commit.as_str(),
            self.statement_timeout_ms
        )
    }
}

async fn connect_with_session(
    url: String,
    session: SessionSettings,
) -> ConnectionResult<AsyncPgConnection> {
    let mut conn = AsyncPgConnection::establish(&url).await?;
    conn.batch_execute(&session.statements())
        .await
        .map_err(ConnectionError::CouldntSetupConfiguration)?;
    Ok(conn)
}

fn setup_callback<F>(callback: F) -> F
where
    F: for<'a> Fn(&'a str) -> SetupFuture<'a> + Send + Sync + 'static,
{
    callback
}

/// ## Summary
/// Creates a new database connection pool.
///
/// Each new connection runs the `session` settings before it is handed out.
///
/// ## Errors
/// Returns an error if the pool cannot be created with the provided database URL.
#[tracing::instrument(skip(database_url), fields(pool_size = size))]
pub async fn create_pool(
    database_url: &str,
    size: u32,
    session: SessionSettings,
) -> anyhow::Result<DbPool> {
    tracing::debug!("Creating database connection pool");

    let mut manager_config = ManagerConfig::default();
    manager_config.custom_setup = Box::new(setup_callback(move |url| {
        Box::pin(connect_with_session(url.to_owned(), session))
    }));

    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_config(
        database_url,
        manager_config,
    );

    let pool = Pool::builder()
        .max_size(size)
        .min_idle(Some(size))
        .test_on_check_out(false)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .await?;

    tracing::info!(
        pool_size = size,
        synchronous_commit = session.synchronous_commit.as_str(),
        statement_timeout_ms = session.statement_timeout_ms,
        "Database connection pool created successfully"
    );

    Ok(pool)
}

impl DbProvider for DbPool {
    #[tracing::instrument(skip(self))]
    fn get_connection<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>> {
        Box::pin(async move { Ok(self.get().await?) })
    }
}
