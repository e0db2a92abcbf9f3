use salvo::http::StatusCode;
use salvo::writing::{Json, Writer};
use salvo::{Depot, Request, Response, async_trait};
use serde::Serialize;
use thiserror::Error;

use outreach_db::error::DbError;
use outreach_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] DbError),

    #[error(transparent)]
    CoreError(#[from] outreach_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.into())
    }
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn database_status(err: &DbError) -> StatusCode {
    match err {
        DbError::PoolError(_) => StatusCode::SERVICE_UNAVAILABLE,
        DbError::DatabaseError(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
        DbError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl AppError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceError(err) => match err {
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ServiceError::Conflict(_) => StatusCode::CONFLICT,
                ServiceError::DatabaseError(db) => database_status(db),
                ServiceError::DieselError(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
                ServiceError::DieselError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::DatabaseError(db) => database_status(db),
            Self::CoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors carry their own message; server errors are not echoed back.
    #[must_use]
    pub fn public_message(&self) -> String {
        let status = self.status_code();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            "Database unavailable".to_string()
        } else if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: self.public_message(),
        }));
    }
}
