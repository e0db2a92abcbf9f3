//! `/api/communications`: the catalogue of outreach channels.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use outreach_core::constants::COMMUNICATION_METHODS_ROUTE_COMPONENT;
use outreach_db::db::query::communication_method;
use outreach_db::model::communication_method::{
    CommunicationMethod, CommunicationMethodFields, NewCommunicationMethod,
};
use outreach_service::records::{self, require};

use super::params::{json_body, path_id};
use crate::db_handler::connection;
use crate::error::AppResult;

/// Methods are listed in `sequence` order.
#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<CommunicationMethod>>> {
    let mut conn = connection(depot).await?;

    Ok(Json(communication_method::list_methods(&mut conn).await?))
}

#[handler]
async fn create(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<CommunicationMethod>> {
    let fields: CommunicationMethodFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    let created =
        communication_method::create_method(&mut conn, &NewCommunicationMethod::new(fields)).await?;
    tracing::info!(method_id = %created.id, "Communication method created");

    res.status_code(StatusCode::CREATED);
    Ok(Json(created))
}

#[handler]
async fn show(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CommunicationMethod>> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    let found = communication_method::get_method(&mut conn, id).await?;
    Ok(Json(require(found, "communication method", id)?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CommunicationMethod>> {
    let id = path_id(req)?;
    let fields: CommunicationMethodFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    let updated = communication_method::update_method(&mut conn, id, &fields).await?;
    Ok(Json(require(updated, "communication method", id)?))
}

#[handler]
async fn remove(req: &mut Request, depot: &mut Depot) -> AppResult<StatusCode> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    records::delete_method(&mut conn, id).await?;
    tracing::info!(method_id = %id, "Communication method deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(COMMUNICATION_METHODS_ROUTE_COMPONENT)
        .get(list)
        .post(create)
        .push(
            Router::with_path("{id}")
                .get(show)
                .put(update)
                .delete(remove),
        )
}
