//! Request extraction shared by the record handlers.

use salvo::Request;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::BadRequest(format!("invalid id '{raw}': {e}")))
}

/// ## Summary
/// Parses the `{id}` path segment.
///
/// ## Errors
/// Returns `BadRequest` if the segment is missing or not a UUID.
pub fn path_id(req: &Request) -> AppResult<Uuid> {
    let raw = req
        .param::<String>("id")
        .ok_or_else(|| AppError::BadRequest("missing id".to_string()))?;
    parse_id(&raw)
}

/// ## Summary
/// Parses an optional UUID query filter such as `?company_id=`.
///
/// ## Errors
/// Returns `BadRequest` if the parameter is present but not a UUID.
pub fn query_id(req: &Request, key: &str) -> AppResult<Option<Uuid>> {
    req.query::<String>(key)
        .filter(|raw| !raw.is_empty())
        .map(|raw| parse_id(&raw))
        .transpose()
}

/// ## Summary
/// Deserializes the JSON request body.
///
/// ## Errors
/// Returns `BadRequest` if the body is not valid JSON for `T`.
pub async fn json_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))
}
