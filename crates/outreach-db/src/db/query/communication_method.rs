//! Query functions for communication methods.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::communication_method;
use crate::model::communication_method::{
    CommunicationMethod, CommunicationMethodFields, NewCommunicationMethod,
};

/// ## Summary
/// Returns a query to select all methods.
#[must_use]
pub fn all() -> communication_method::BoxedQuery<'static, diesel::pg::Pg> {
    communication_method::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a method by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> communication_method::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(communication_method::id.eq(id))
}

/// ## Summary
/// Returns a query over all methods in contact order.
#[must_use]
pub fn in_sequence() -> communication_method::BoxedQuery<'static, diesel::pg::Pg> {
    all().order((
        communication_method::sequence.asc(),
        communication_method::id.asc(),
    ))
}

/// ## Summary
/// Returns a query over the methods every company must go through.
#[must_use]
pub fn mandatory() -> communication_method::BoxedQuery<'static, diesel::pg::Pg> {
    in_sequence().filter(communication_method::mandatory.eq(true))
}

/// ## Summary
/// Inserts a new method and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_method(
    conn: &mut DbConnection<'_>,
    new_method: &NewCommunicationMethod,
) -> QueryResult<CommunicationMethod> {
    diesel::insert_into(communication_method::table)
        .values(new_method)
        .returning(CommunicationMethod::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Inserts several methods in one statement.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_methods(
    conn: &mut DbConnection<'_>,
    new_methods: &[NewCommunicationMethod],
) -> QueryResult<Vec<CommunicationMethod>> {
    diesel::insert_into(communication_method::table)
        .values(new_methods)
        .returning(CommunicationMethod::as_returning())
        .get_results(conn)
        .await
}

/// ## Summary
/// Retrieves a method by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_method(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<CommunicationMethod>> {
    by_id(id)
        .select(CommunicationMethod::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists methods in contact order.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_methods(conn: &mut DbConnection<'_>) -> QueryResult<Vec<CommunicationMethod>> {
    in_sequence()
        .select(CommunicationMethod::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Replaces every writable column of a method.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_method(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    fields: &CommunicationMethodFields,
) -> QueryResult<Option<CommunicationMethod>> {
    diesel::update(communication_method::table.filter(communication_method::id.eq(id)))
        .set((fields, communication_method::updated_at.eq(diesel::dsl::now)))
        .returning(CommunicationMethod::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a method and returns the number of deleted rows.
///
/// ## Errors
/// Returns a foreign key violation if communications still use the method.
pub async fn delete_method(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(communication_method::table.filter(communication_method::id.eq(id)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes every method.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_all(conn: &mut DbConnection<'_>) -> QueryResult<usize> {
    diesel::delete(communication_method::table)
        .execute(conn)
        .await
}

/// ## Summary
/// Counts methods.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    communication_method::table.count().get_result(conn).await
}
