#![allow(clippy::expect_used)]
//! Session settings the pool applies to new connections.

use diesel::QueryableByName;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use outreach_test::outreach_core::config::SynchronousCommit;
use outreach_test::outreach_db::db::connection::{DbConnection, SessionSettings, create_pool};

use super::helpers::database_url;

#[derive(QueryableByName)]
struct Setting {
    #[diesel(sql_type = Text)]
    value: String,
}

async fn current_setting(conn: &mut DbConnection<'_>, name: &str) -> String {
    diesel::sql_query("SELECT current_setting($1) AS value")
        .bind::<Text, _>(name)
        .get_result::<Setting>(conn)
        .await
        .expect("setting readable")
        .value
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn pooled_connections_carry_session_settings() {
    let session = SessionSettings {
        synchronous_commit: SynchronousCommit::Off,
        statement_timeout_ms: 250,
    };
    let pool = create_pool(&database_url(), 1, session)
        .await
        .expect("pool connects");
    let mut conn = pool.get().await.expect("connection available");

    let durability = current_setting(&mut conn, "synchronous_commit").await;
    let timeout = current_setting(&mut conn, "statement_timeout").await;

    assert_eq!(durability, "off");
    assert_eq!(timeout, "250ms");
}

#[test_log::test(tokio::test)]
#[ignore = "requires PostgreSQL via TEST_DATABASE_URL"]
async fn statement_timeout_cancels_slow_queries() {
    let session = SessionSettings {
        synchronous_commit: SynchronousCommit::On,
        statement_timeout_ms: 50,
    };
    let pool = create_pool(&database_url(), 1, session)
        .await
        .expect("pool connects");
    let mut conn = pool.get().await.expect("connection available");

    let slow = diesel::sql_query("SELECT pg_sleep(1)")
        .execute(&mut conn)
        .await;

    assert!(slow.is_err());
}
