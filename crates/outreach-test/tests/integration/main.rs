//! Database-backed tests. Run with
//! `TEST_DATABASE_URL=postgres://... cargo test -p outreach-test -- --ignored`.

mod crud;
mod helpers;
mod seed;
mod session;
