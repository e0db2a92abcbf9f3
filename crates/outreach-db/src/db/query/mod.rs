//! Query builders and CRUD helpers, one module per table.

pub mod communication;
pub mod communication_method;
pub mod company;
pub mod notification;
