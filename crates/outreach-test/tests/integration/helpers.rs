#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Connecting to the database named by `TEST_DATABASE_URL`
//! - Building the Salvo service over that database
//! - Making JSON requests
//!
//! ## Database Isolation
//! Every test shares the one database. `TestDb` holds a process-wide lock for
//! its lifetime and empties the outreach tables on creation, so tests run one
//! at a time against a clean schema.

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use salvo::{Router, Service};
use tokio::sync::{Mutex, MutexGuard};

use outreach_test::outreach_app::app::api::routes;
use outreach_test::outreach_app::db_handler::DbProviderHandler;
use outreach_test::outreach_db::db::connection::{
    DbConnection, DbPool, SessionSettings, create_pool,
};
use outreach_test::outreach_db::db::migrations::run_pending_migrations;
use outreach_test::outreach_service::seed::{self, Fixture, PgSeedStore, SeedReport, SeedStore};

pub use serde_json::{Value, json};

pub const BASE: &str = "http://127.0.0.1:5800/api";

static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub fn database_url() -> String {
    std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a disposable PostgreSQL database")
}

/// Exclusive handle on the test database.
pub struct TestDb {
    pool: DbPool,
    _guard: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Locks the database, applies migrations and clears every table.
    pub async fn new() -> Self {
        let guard = DB_LOCK.lock().await;
        let url = database_url();

        run_pending_migrations(&url)
            .await
            .expect("migrations apply");
        let pool = create_pool(&url, 2, SessionSettings::default())
            .await
            .expect("test pool connects");

        let db = Self {
            pool,
            _guard: guard,
        };
        db.clear().await;
        db
    }

    pub async fn conn(&self) -> DbConnection<'_> {
        self.pool.get().await.expect("connection available")
    }

    pub async fn clear(&self) {
        PgSeedStore::new(self.conn().await)
            .clear()
            .await
            .expect("tables clear");
    }

    pub async fn seed(&self) -> SeedReport {
        let mut store = PgSeedStore::new(self.conn().await);
        seed::run(&mut store, &Fixture::demo())
            .await
            .expect("demo fixture seeds")
    }

    pub fn service(&self) -> Service {
        Service::new(
            Router::new()
                .hoop(DbProviderHandler {
                    provider: self.pool.clone(),
                })
                .push(routes()),
        )
    }
}

async fn into_parts(mut res: salvo::Response) -> (StatusCode, Value) {
    let status = res.status_code.unwrap_or(StatusCode::OK);
    let body = res.take_json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(service: &Service, path: &str) -> (StatusCode, Value) {
    into_parts(TestClient::get(format!("{BASE}{path}")).send(service).await).await
}

pub async fn post(service: &Service, path: &str, body: &Value) -> (StatusCode, Value) {
    into_parts(
        TestClient::post(format!("{BASE}{path}"))
            .json(body)
            .send(service)
            .await,
    )
    .await
}

pub async fn put(service: &Service, path: &str, body: &Value) -> (StatusCode, Value) {
    into_parts(
        TestClient::put(format!("{BASE}{path}"))
            .json(body)
            .send(service)
            .await,
    )
    .await
}

pub async fn delete(service: &Service, path: &str) -> StatusCode {
    TestClient::delete(format!("{BASE}{path}"))
        .send(service)
        .await
        .status_code
        .unwrap_or(StatusCode::OK)
}

/// Returns the `id` field of a JSON record.
pub fn id_of(record: &Value) -> String {
    record["id"]
        .as_str()
        .expect("record carries an id")
        .to_string()
}
