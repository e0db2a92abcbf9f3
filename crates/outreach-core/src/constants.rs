/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const COMPANIES_ROUTE_COMPONENT: &str = "companies";
pub const COMPANIES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", COMPANIES_ROUTE_COMPONENT);

// Communication *methods* live under `communications`; logged communications
// live under `communications-user`. Existing clients depend on both paths.
pub const COMMUNICATION_METHODS_ROUTE_COMPONENT: &str = "communications";
pub const COMMUNICATION_METHODS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", COMMUNICATION_METHODS_ROUTE_COMPONENT);

pub const COMMUNICATIONS_ROUTE_COMPONENT: &str = "communications-user";
pub const COMMUNICATIONS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", COMMUNICATIONS_ROUTE_COMPONENT);

pub const NOTIFICATIONS_ROUTE_COMPONENT: &str = "notifications";
pub const NOTIFICATIONS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", NOTIFICATIONS_ROUTE_COMPONENT);

pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";
