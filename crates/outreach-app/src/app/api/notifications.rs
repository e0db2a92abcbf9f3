//! `/api/notifications`

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use outreach_core::constants::NOTIFICATIONS_ROUTE_COMPONENT;
use outreach_db::db::query::notification;
use outreach_db::model::notification::{Notification, NotificationFields};
use outreach_service::records::{self, require};

use super::params::{json_body, path_id, query_id};
use crate::db_handler::connection;
use crate::error::AppResult;

#[handler]
async fn list(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Notification>>> {
    let user_id = query_id(req, "user_id")?;
    let mut conn = connection(depot).await?;

    Ok(Json(notification::list_notifications(&mut conn, user_id).await?))
}

#[handler]
async fn create(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<Notification>> {
    let fields: NotificationFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    let created = records::create_notification(&mut conn, fields).await?;
    tracing::info!(notification_id = %created.id, "Notification created");

    res.status_code(StatusCode::CREATED);
    Ok(Json(created))
}

#[handler]
async fn show(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Notification>> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    let found = notification::get_notification(&mut conn, id).await?;
    Ok(Json(require(found, "notification", id)?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Notification>> {
    let id = path_id(req)?;
    let fields: NotificationFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    Ok(Json(records::update_notification(&mut conn, id, &fields).await?))
}

#[handler]
async fn remove(req: &mut Request, depot: &mut Depot) -> AppResult<StatusCode> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    records::delete_notification(&mut conn, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NOTIFICATIONS_ROUTE_COMPONENT)
        .get(list)
        .post(create)
        .push(
            Router::with_path("{id}")
                .get(show)
                .put(update)
                .delete(remove),
        )
}
