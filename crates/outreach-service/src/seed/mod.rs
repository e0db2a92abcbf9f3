//! Demo data loader.
//!
//! A run validates the whole fixture, wipes the outreach tables and inserts
//! companies, communication methods, communications and notifications in that
//! order. Steps are not wrapped in one transaction: a failure part way leaves
//! the earlier steps committed, and the returned error names the step.

pub mod fixtures;
pub mod store;

#[cfg(test)]
mod memory;

use std::fmt;

use outreach_db::error::DbError;
use thiserror::Error;

pub use fixtures::{Fixture, SeedPlan};
pub use store::{PgSeedStore, SeedStore};

/// One stage of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStep {
    Reset,
    Companies,
    CommunicationMethods,
    Communications,
    Notifications,
}

impl fmt::Display for SeedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reset => "reset",
            Self::Companies => "companies",
            Self::CommunicationMethods => "communication methods",
            Self::Communications => "communications",
            Self::Notifications => "notifications",
        })
    }
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database unreachable: {0:#}")]
    Connection(anyhow::Error),

    #[error("Invalid fixture: {0}")]
    Validation(String),

    #[error("Seed step '{step}' failed: {source}")]
    Write {
        step: SeedStep,
        #[source]
        source: DbError,
    },

    #[error("Seed step '{step}' wrote {inserted} of {expected} rows")]
    Incomplete {
        step: SeedStep,
        expected: usize,
        inserted: usize,
    },
}

/// Row counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub cleared: usize,
    pub companies: usize,
    pub methods: usize,
    pub communications: usize,
    pub notifications: usize,
}

fn write_failed(step: SeedStep) -> impl FnOnce(DbError) -> SeedError {
    move |source| SeedError::Write { step, source }
}

fn ensure_complete(step: SeedStep, expected: usize, inserted: usize) -> Result<usize, SeedError> {
    if inserted == expected {
        Ok(inserted)
    } else {
        Err(SeedError::Incomplete {
            step,
            expected,
            inserted,
        })
    }
}

/// ## Summary
/// Replaces the contents of `store` with `fixture`.
///
/// ## Errors
/// Returns `SeedError::Validation` before touching the store if the fixture
/// does not resolve, and `SeedError::Write` or `SeedError::Incomplete` naming
/// the step that failed otherwise.
#[tracing::instrument(skip_all)]
pub async fn run<S: SeedStore>(store: &mut S, fixture: &Fixture) -> Result<SeedReport, SeedError> {
    let plan = fixture.plan()?;
    tracing::debug!(
        companies = plan.companies.len(),
        methods = plan.methods.len(),
        communications = plan.communications.len(),
        notifications = plan.notifications.len(),
        "Fixture resolved"
    );

    let cleared = store.clear().await.map_err(write_failed(SeedStep::Reset))?;
    tracing::info!(cleared, "Existing outreach data removed");

    let step = SeedStep::Companies;
    let companies = store
        .insert_companies(&plan.companies)
        .await
        .map_err(write_failed(step))?;
    let companies = ensure_complete(step, plan.companies.len(), companies.len())?;
    tracing::info!(count = companies, "Seeded {step}");

    let step = SeedStep::CommunicationMethods;
    let methods = store
        .insert_methods(&plan.methods)
        .await
        .map_err(write_failed(step))?;
    let methods = ensure_complete(step, plan.methods.len(), methods.len())?;
    tracing::info!(count = methods, "Seeded {step}");

    let step = SeedStep::Communications;
    let communications = store
        .insert_communications(&plan.communications)
        .await
        .map_err(write_failed(step))?;
    let communications = ensure_complete(step, plan.communications.len(), communications.len())?;
    tracing::info!(count = communications, "Seeded {step}");

    let step = SeedStep::Notifications;
    let notifications = store
        .insert_notifications(&plan.notifications)
        .await
        .map_err(write_failed(step))?;
    let notifications = ensure_complete(step, plan.notifications.len(), notifications.len())?;
    tracing::info!(count = notifications, "Seeded {step}");

    Ok(SeedReport {
        cleared,
        companies,
        methods,
        communications,
        notifications,
    })
}
