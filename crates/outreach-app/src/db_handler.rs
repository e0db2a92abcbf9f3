use std::sync::Arc;

use salvo::{Depot, FlowCtrl, Handler, Request, Response, async_trait};

use outreach_core::error::CoreError;
use outreach_db::db::DbProvider;
use outreach_db::db::connection::DbConnection;

use crate::error::AppResult;

type SharedProvider = Arc<dyn DbProvider>;

/// Makes `provider` available to every handler below it in the router.
#[derive(Clone)]
pub struct DbProviderHandler<T> {
    pub provider: T,
}

#[async_trait]
impl<T: DbProvider + Clone + 'static> Handler for DbProviderHandler<T> {
    async fn handle(
        &self,
        _req: &mut Request,
        depot: &mut Depot,
        _res: &mut Response,
        _ctrl: &mut FlowCtrl,
    ) {
        depot.inject::<SharedProvider>(Arc::new(self.provider.clone()));
    }
}

/// ## Summary
/// Checks a connection out of the provider injected by [`DbProviderHandler`].
///
/// ## Errors
/// Returns an invariant violation when no provider was injected, and a pool
/// error when no connection can be handed out.
pub async fn connection(depot: &Depot) -> AppResult<DbConnection<'_>> {
    let provider = depot
        .obtain::<SharedProvider>()
        .map_err(|_err| CoreError::InvariantViolation("Database provider not found in depot"))?;

    Ok(provider.get_connection().await?)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use diesel_async::pooled_connection::bb8::RunError;
    use outreach_db::error::{DbError, DbResult};
    use salvo::http::StatusCode;

    use super::*;
    use crate::error::AppError;

    /// Provider whose pool never hands out a connection.
    #[derive(Clone)]
    pub(crate) struct ExhaustedPool;

    impl DbProvider for ExhaustedPool {
        fn get_connection<'a>(
            &'a self,
        ) -> Pin<Box<dyn Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>> {
            Box::pin(async { Err(DbError::PoolError(RunError::TimedOut)) })
        }
    }

    #[tokio::test]
    async fn missing_provider_is_internal_error() {
        let depot = Depot::new();

        let err = connection(&depot).await.err();

        assert_eq!(
            err.as_ref().map(AppError::status_code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[tokio::test]
    async fn exhausted_pool_is_service_unavailable() {
        let mut depot = Depot::new();
        depot.inject::<SharedProvider>(Arc::new(ExhaustedPool));

        let err = connection(&depot).await.err();

        assert_eq!(
            err.as_ref().map(AppError::status_code),
            Some(StatusCode::SERVICE_UNAVAILABLE)
        );
    }
}
