//! Query functions for notifications.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::notification;
use crate::model::notification::{NewNotification, Notification, NotificationFields};

/// ## Summary
/// Returns a query to select all notifications.
#[must_use]
pub fn all() -> notification::BoxedQuery<'static, diesel::pg::Pg> {
    notification::table
        .order(notification::id.asc())
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a notification by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> notification::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(notification::id.eq(id))
}

/// ## Summary
/// Returns a query to find notifications addressed to a user.
#[must_use]
pub fn by_user(user_id: uuid::Uuid) -> notification::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(notification::user_id.eq(user_id))
}

/// ## Summary
/// Inserts a new notification and returns the inserted record.
///
/// ## Errors
/// Returns a foreign key violation if the company or communication does not exist.
pub async fn create_notification(
    conn: &mut DbConnection<'_>,
    new_notification: &NewNotification,
) -> QueryResult<Notification> {
    diesel::insert_into(notification::table)
        .values(new_notification)
        .returning(Notification::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Inserts several notifications in one statement.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_notifications(
    conn: &mut DbConnection<'_>,
    new_notifications: &[NewNotification],
) -> QueryResult<Vec<Notification>> {
    diesel::insert_into(notification::table)
        .values(new_notifications)
        .returning(Notification::as_returning())
        .get_results(conn)
        .await
}

/// ## Summary
/// Retrieves a notification by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_notification(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<Notification>> {
    by_id(id)
        .select(Notification::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists notifications, optionally restricted to one user.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_notifications(
    conn: &mut DbConnection<'_>,
    user_id: Option<uuid::Uuid>,
) -> QueryResult<Vec<Notification>> {
    let query = match user_id {
        Some(user_id) => by_user(user_id),
        None => all(),
    };

    query.select(Notification::as_select()).load(conn).await
}

/// ## Summary
/// Replaces every writable column of a notification.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_notification(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    fields: &NotificationFields,
) -> QueryResult<Option<Notification>> {
    diesel::update(notification::table.filter(notification::id.eq(id)))
        .set((fields, notification::updated_at.eq(diesel::dsl::now)))
        .returning(Notification::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a notification and returns the number of deleted rows.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_notification(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<usize> {
    diesel::delete(notification::table.filter(notification::id.eq(id)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes every notification.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_all(conn: &mut DbConnection<'_>) -> QueryResult<usize> {
    diesel::delete(notification::table).execute(conn).await
}

/// ## Summary
/// Counts notifications.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    notification::table.count().get_result(conn).await
}
