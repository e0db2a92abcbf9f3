//! Query functions for logged communications.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::communication;
use crate::model::communication::{Communication, CommunicationFields, NewCommunication};

/// ## Summary
/// Returns a query to select all communications, most recent first.
#[must_use]
pub fn all() -> communication::BoxedQuery<'static, diesel::pg::Pg> {
    communication::table
        .order((communication::date.desc(), communication::id.asc()))
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a communication by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> communication::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(communication::id.eq(id))
}

/// ## Summary
/// Returns a query to find communications logged for a company.
#[must_use]
pub fn by_company(company_id: uuid::Uuid) -> communication::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(communication::company_id.eq(company_id))
}

/// ## Summary
/// Inserts a new communication and returns the inserted record.
///
/// ## Errors
/// Returns a foreign key violation if the company or method does not exist.
pub async fn create_communication(
    conn: &mut DbConnection<'_>,
    new_communication: &NewCommunication,
) -> QueryResult<Communication> {
    diesel::insert_into(communication::table)
        .values(new_communication)
        .returning(Communication::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Inserts several communications in one statement.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_communications(
    conn: &mut DbConnection<'_>,
    new_communications: &[NewCommunication],
) -> QueryResult<Vec<Communication>> {
    diesel::insert_into(communication::table)
        .values(new_communications)
        .returning(Communication::as_returning())
        .get_results(conn)
        .await
}

/// ## Summary
/// Retrieves a communication by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_communication(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<Communication>> {
    by_id(id)
        .select(Communication::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists communications, optionally restricted to one company.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_communications(
    conn: &mut DbConnection<'_>,
    company_id: Option<uuid::Uuid>,
) -> QueryResult<Vec<Communication>> {
    let query = match company_id {
        Some(company_id) => by_company(company_id),
        None => all(),
    };

    query.select(Communication::as_select()).load(conn).await
}

/// ## Summary
/// Replaces every writable column of a communication.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_communication(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    fields: &CommunicationFields,
) -> QueryResult<Option<Communication>> {
    diesel::update(communication::table.filter(communication::id.eq(id)))
        .set((fields, communication::updated_at.eq(diesel::dsl::now)))
        .returning(Communication::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a communication and returns the number of deleted rows.
///
/// ## Errors
/// Returns a foreign key violation if notifications still reference it.
pub async fn delete_communication(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<usize> {
    diesel::delete(communication::table.filter(communication::id.eq(id)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes every communication.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_all(conn: &mut DbConnection<'_>) -> QueryResult<usize> {
    diesel::delete(communication::table).execute(conn).await
}

/// ## Summary
/// Counts communications.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    communication::table.count().get_result(conn).await
}
