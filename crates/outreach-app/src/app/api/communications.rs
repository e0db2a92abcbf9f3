//! `/api/communications-user`: logged contacts with a company.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use outreach_core::constants::COMMUNICATIONS_ROUTE_COMPONENT;
use outreach_db::db::query::communication;
use outreach_db::model::communication::{Communication, CommunicationFields};
use outreach_service::records::{self, require};

use super::params::{json_body, path_id, query_id};
use crate::db_handler::connection;
use crate::error::AppResult;

/// Newest first; `?company_id=` narrows to one company.
#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Communication>>> {
    let company_id = query_id(req, "company_id")?;
    let mut conn = connection(depot).await?;

    Ok(Json(
        communication::list_communications(&mut conn, company_id).await?,
    ))
}

#[handler]
async fn create(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<Communication>> {
    let fields: CommunicationFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    let created = records::create_communication(&mut conn, fields).await?;
    tracing::info!(communication_id = %created.id, "Communication logged");

    res.status_code(StatusCode::CREATED);
    Ok(Json(created))
}

#[handler]
async fn show(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Communication>> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    let found = communication::get_communication(&mut conn, id).await?;
    Ok(Json(require(found, "communication", id)?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Communication>> {
    let id = path_id(req)?;
    let fields: CommunicationFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    Ok(Json(records::update_communication(&mut conn, id, &fields).await?))
}

#[handler]
async fn remove(req: &mut Request, depot: &mut Depot) -> AppResult<StatusCode> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    records::delete_communication(&mut conn, id).await?;
    tracing::info!(communication_id = %id, "Communication deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(COMMUNICATIONS_ROUTE_COMPONENT)
        .get(list)
        .post(create)
        .push(
            Router::with_path("{id}")
                .get(show)
                .put(update)
                .delete(remove),
        )
}
