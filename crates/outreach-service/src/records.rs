//! Record mutations that carry rules beyond a single statement.
//!
//! Reads and plain writes go straight to `outreach_db::db::query`; everything
//! here either checks references before writing or turns constraint
//! violations into [`ServiceError`] variants the HTTP layer can map.

use diesel::QueryResult;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use outreach_db::db::connection::DbConnection;
use outreach_db::db::query::{communication, communication_method, company, notification};
use outreach_db::model::communication::{Communication, CommunicationFields, NewCommunication};
use outreach_db::model::notification::{NewNotification, Notification, NotificationFields};

use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Converts an optional lookup result into a `NotFound` error.
///
/// ## Errors
/// Returns `ServiceError::NotFound` when `value` is `None`.
pub fn require<T>(value: Option<T>, entity: &str, id: uuid::Uuid) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::NotFound(format!("{entity} {id}")))
}

async fn ensure_company(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    if company::get_company(conn, id).await?.is_none() {
        return Err(ServiceError::InvalidReference(format!("company {id} does not exist")));
    }
    Ok(())
}

async fn ensure_communication_refs(
    conn: &mut DbConnection<'_>,
    fields: &CommunicationFields,
) -> ServiceResult<()> {
    ensure_company(conn, fields.company_id).await?;

    if communication_method::get_method(conn, fields.method_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::InvalidReference(format!(
            "communication method {} does not exist",
            fields.method_id
        )));
    }
    Ok(())
}

async fn ensure_notification_refs(
    conn: &mut DbConnection<'_>,
    fields: &NotificationFields,
) -> ServiceResult<()> {
    ensure_company(conn, fields.company_id).await?;

    if communication::get_communication(conn, fields.communication_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::InvalidReference(format!(
            "communication {} does not exist",
            fields.communication_id
        )));
    }
    Ok(())
}

/// A row referenced by a concurrent delete between the check and the write
/// still trips the foreign key; report it the same way as a failed check.
fn map_write<T>(entity: &str, result: QueryResult<T>) -> ServiceResult<T> {
    match result {
        Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info)) => Err(
            ServiceError::InvalidReference(format!("{entity}: {}", info.message())),
        ),
        other => Ok(other?),
    }
}

fn map_delete(entity: &str, id: uuid::Uuid, result: QueryResult<usize>) -> ServiceResult<()> {
    match result {
        Ok(0) => Err(ServiceError::NotFound(format!("{entity} {id}"))),
        Ok(_) => Ok(()),
        Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => Err(
            ServiceError::Conflict(format!("{entity} {id} is still referenced")),
        ),
        Err(e) => Err(e.into()),
    }
}

/// ## Summary
/// Logs a new communication after checking its company and method exist.
///
/// ## Errors
/// Returns `InvalidReference` for a missing company or method, or a database error.
#[tracing::instrument(skip(conn, fields), fields(company_id = %fields.company_id))]
pub async fn create_communication(
    conn: &mut DbConnection<'_>,
    fields: CommunicationFields,
) -> ServiceResult<Communication> {
    ensure_communication_refs(conn, &fields).await?;

    let new_communication = NewCommunication::new(fields);
    map_write(
        "communication",
        communication::create_communication(conn, &new_communication).await,
    )
}

/// ## Summary
/// Replaces a communication after checking its new references.
///
/// ## Errors
/// Returns `NotFound`, `InvalidReference`, or a database error.
#[tracing::instrument(skip(conn, fields))]
pub async fn update_communication(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    fields: &CommunicationFields,
) -> ServiceResult<Communication> {
    ensure_communication_refs(conn, fields).await?;

    let updated = map_write(
        "communication",
        communication::update_communication(conn, id, fields).await,
    )?;
    require(updated, "communication", id)
}

/// ## Summary
/// Creates a notification after checking its company and communication exist.
///
/// The user reference is external and accepted as is.
///
/// ## Errors
/// Returns `InvalidReference` for a missing company or communication, or a database error.
#[tracing::instrument(skip(conn, fields), fields(user_id = %fields.user_id))]
pub async fn create_notification(
    conn: &mut DbConnection<'_>,
    fields: NotificationFields,
) -> ServiceResult<Notification> {
    ensure_notification_refs(conn, &fields).await?;

    let new_notification = NewNotification::new(fields);
    map_write(
        "notification",
        notification::create_notification(conn, &new_notification).await,
    )
}

/// ## Summary
/// Replaces a notification after checking its new references.
///
/// ## Errors
/// Returns `NotFound`, `InvalidReference`, or a database error.
#[tracing::instrument(skip(conn, fields))]
pub async fn update_notification(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    fields: &NotificationFields,
) -> ServiceResult<Notification> {
    ensure_notification_refs(conn, fields).await?;

    let updated = map_write(
        "notification",
        notification::update_notification(conn, id, fields).await,
    )?;
    require(updated, "notification", id)
}

/// ## Summary
/// Deletes a company that nothing references any more.
///
/// ## Errors
/// Returns `NotFound`, `Conflict` when communications or notifications still
/// point at it, or a database error.
pub async fn delete_company(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    map_delete("company", id, company::delete_company(conn, id).await)
}

/// ## Summary
/// Deletes a communication method that no communication uses.
///
/// ## Errors
/// Returns `NotFound`, `Conflict`, or a database error.
pub async fn delete_method(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    map_delete(
        "communication method",
        id,
        communication_method::delete_method(conn, id).await,
    )
}

/// ## Summary
/// Deletes a communication that no notification references.
///
/// ## Errors
/// Returns `NotFound`, `Conflict`, or a database error.
pub async fn delete_communication(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> ServiceResult<()> {
    map_delete(
        "communication",
        id,
        communication::delete_communication(conn, id).await,
    )
}

/// ## Summary
/// Deletes a notification.
///
/// ## Errors
/// Returns `NotFound` or a database error.
pub async fn delete_notification(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> ServiceResult<()> {
    map_delete(
        "notification",
        id,
        notification::delete_notification(conn, id).await,
    )
}
