mod communication_methods;
mod communications;
mod companies;
mod healthcheck;
mod notifications;
mod params;

use salvo::Router;

pub use outreach_core::constants::{API_ROUTE_COMPONENT, API_ROUTE_PREFIX};

/// ## Summary
/// Constructs the API router with every record group and the healthcheck.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(companies::routes())
        .push(communication_methods::routes())
        .push(communications::routes())
        .push(notifications::routes())
}
