use outreach_db::db::connection::DbConnection;
use outreach_db::db::query::{communication, communication_method, company, notification};
use outreach_db::error::DbResult;
use outreach_db::model::communication::{Communication, NewCommunication};
use outreach_db::model::communication_method::{CommunicationMethod, NewCommunicationMethod};
use outreach_db::model::company::{Company, NewCompany};
use outreach_db::model::notification::{NewNotification, Notification};

/// Storage the seed loader writes through.
pub trait SeedStore {
    /// Removes every outreach record, dependents first. Returns the number of
    /// rows removed.
    ///
    /// ## Errors
    /// Returns an error if any delete fails.
    fn clear(&mut self) -> impl Future<Output = DbResult<usize>>;

    /// ## Errors
    /// Returns an error if the insert fails.
    fn insert_companies(
        &mut self,
        rows: &[NewCompany],
    ) -> impl Future<Output = DbResult<Vec<Company>>>;

    /// ## Errors
    /// Returns an error if the insert fails.
    fn insert_methods(
        &mut self,
        rows: &[NewCommunicationMethod],
    ) -> impl Future<Output = DbResult<Vec<CommunicationMethod>>>;

    /// ## Errors
    /// Returns an error if the insert fails or a reference does not resolve.
    fn insert_communications(
        &mut self,
        rows: &[NewCommunication],
    ) -> impl Future<Output = DbResult<Vec<Communication>>>;

    /// ## Errors
    /// Returns an error if the insert fails or a reference does not resolve.
    fn insert_notifications(
        &mut self,
        rows: &[NewNotification],
    ) -> impl Future<Output = DbResult<Vec<Notification>>>;
}

/// [`SeedStore`] backed by a pooled `PostgreSQL` connection.
pub struct PgSeedStore<'pool> {
    conn: DbConnection<'pool>,
}

impl<'pool> PgSeedStore<'pool> {
    #[must_use]
    pub fn new(conn: DbConnection<'pool>) -> Self {
        Self { conn }
    }
}

impl SeedStore for PgSeedStore<'_> {
    async fn clear(&mut self) -> DbResult<usize> {
        let notifications = notification::delete_all(&mut self.conn).await?;
        let communications = communication::delete_all(&mut self.conn).await?;
        let methods = communication_method::delete_all(&mut self.conn).await?;
        let companies = company::delete_all(&mut self.conn).await?;

        tracing::debug!(
            notifications,
            communications,
            methods,
            companies,
            "Cleared outreach tables"
        );

        Ok(notifications + communications + methods + companies)
    }

    async fn insert_companies(&mut self, rows: &[NewCompany]) -> DbResult<Vec<Company>> {
        Ok(company::create_companies(&mut self.conn, rows).await?)
    }

    async fn insert_methods(
        &mut self,
        rows: &[NewCommunicationMethod],
    ) -> DbResult<Vec<CommunicationMethod>> {
        Ok(communication_method::create_methods(&mut self.conn, rows).await?)
    }

    async fn insert_communications(
        &mut self,
        rows: &[NewCommunication],
    ) -> DbResult<Vec<Communication>> {
        Ok(communication::create_communications(&mut self.conn, rows).await?)
    }

    async fn insert_notifications(
        &mut self,
        rows: &[NewNotification],
    ) -> DbResult<Vec<Notification>> {
        Ok(notification::create_notifications(&mut self.conn, rows).await?)
    }
}
