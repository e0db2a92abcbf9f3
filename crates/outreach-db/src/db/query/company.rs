//! Query functions for companies.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::company;
use crate::model::company::{Company, CompanyFields, NewCompany};

/// ## Summary
/// Returns a query to select all companies.
#[must_use]
pub fn all() -> company::BoxedQuery<'static, diesel::pg::Pg> {
    company::table.into_boxed()
}

/// ## Summary
/// Returns a query to find a company by ID.
#[must_use]
pub fn by_id(id: uuid::Uuid) -> company::BoxedQuery<'static, diesel::pg::Pg> {
    all().filter(company::id.eq(id))
}

/// ## Summary
/// Inserts a new company and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn create_company(
    conn: &mut DbConnection<'_>,
    new_company: &NewCompany,
) -> QueryResult<Company> {
    diesel::insert_into(company::table)
        .values(new_company)
        .returning(Company::as_returning())
        .get_result(conn)
        .await
}

/// ## Summary
/// Inserts several companies in one statement.
///
/// ## Errors
/// Returns a database error if the insert fails; no row is written in that case.
pub async fn create_companies(
    conn: &mut DbConnection<'_>,
    new_companies: &[NewCompany],
) -> QueryResult<Vec<Company>> {
    diesel::insert_into(company::table)
        .values(new_companies)
        .returning(Company::as_returning())
        .get_results(conn)
        .await
}

/// ## Summary
/// Retrieves a company by ID.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_company(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
) -> QueryResult<Option<Company>> {
    by_id(id)
        .select(Company::as_select())
        .first(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists companies ordered by name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_companies(conn: &mut DbConnection<'_>) -> QueryResult<Vec<Company>> {
    all()
        .order((company::name.asc(), company::id.asc()))
        .select(Company::as_select())
        .load(conn)
        .await
}

/// ## Summary
/// Replaces every writable column of a company.
///
/// Returns `None` when no company has the given ID.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_company(
    conn: &mut DbConnection<'_>,
    id: uuid::Uuid,
    fields: &CompanyFields,
) -> QueryResult<Option<Company>> {
    diesel::update(company::table.filter(company::id.eq(id)))
        .set((fields, company::updated_at.eq(diesel::dsl::now)))
        .returning(Company::as_returning())
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Deletes a company and returns the number of deleted rows.
///
/// ## Errors
/// Returns a foreign key violation if communications or notifications still
/// reference the company.
pub async fn delete_company(conn: &mut DbConnection<'_>, id: uuid::Uuid) -> QueryResult<usize> {
    diesel::delete(company::table.filter(company::id.eq(id)))
        .execute(conn)
        .await
}

/// ## Summary
/// Deletes every company.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_all(conn: &mut DbConnection<'_>) -> QueryResult<usize> {
    diesel::delete(company::table).execute(conn).await
}

/// ## Summary
/// Counts companies.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn count(conn: &mut DbConnection<'_>) -> QueryResult<i64> {
    company::table.count().get_result(conn).await
}
