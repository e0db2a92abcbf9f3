//! `/api/companies`

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use outreach_core::constants::COMPANIES_ROUTE_COMPONENT;
use outreach_db::db::query::company;
use outreach_db::model::company::{Company, CompanyFields, NewCompany};
use outreach_service::records::{self, require};

use super::params::{json_body, path_id};
use crate::db_handler::connection;
use crate::error::AppResult;

#[handler]
async fn list(depot: &mut Depot) -> AppResult<Json<Vec<Company>>> {
    let mut conn = connection(depot).await?;

    Ok(Json(company::list_companies(&mut conn).await?))
}

#[handler]
async fn create(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> AppResult<Json<Company>> {
    let fields: CompanyFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    let created = company::create_company(&mut conn, &NewCompany::new(fields)).await?;
    tracing::info!(company_id = %created.id, "Company created");

    res.status_code(StatusCode::CREATED);
    Ok(Json(created))
}

#[handler]
async fn show(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Company>> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    let found = company::get_company(&mut conn, id).await?;
    Ok(Json(require(found, "company", id)?))
}

#[handler]
async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Company>> {
    let id = path_id(req)?;
    let fields: CompanyFields = json_body(req).await?;
    let mut conn = connection(depot).await?;

    let updated = company::update_company(&mut conn, id, &fields).await?;
    Ok(Json(require(updated, "company", id)?))
}

#[handler]
async fn remove(req: &mut Request, depot: &mut Depot) -> AppResult<StatusCode> {
    let id = path_id(req)?;
    let mut conn = connection(depot).await?;

    records::delete_company(&mut conn, id).await?;
    tracing::info!(company_id = %id, "Company deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(COMPANIES_ROUTE_COMPONENT)
        .get(list)
        .post(create)
        .push(
            Router::with_path("{id}")
                .get(show)
                .put(update)
                .delete(remove),
        )
}
