use chrono::Utc;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use outreach_db::error::{DbError, DbResult};
use outreach_db::model::communication::{Communication, NewCommunication};
use outreach_db::model::communication_method::{CommunicationMethod, NewCommunicationMethod};
use outreach_db::model::company::{Company, NewCompany};
use outreach_db::model::notification::{NewNotification, Notification};

use super::{SeedStep, SeedStore};

/// In-process store that enforces the same references as the schema.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub companies: Vec<Company>,
    pub methods: Vec<CommunicationMethod>,
    pub communications: Vec<Communication>,
    pub notifications: Vec<Notification>,
    fail_at: Option<SeedStep>,
}

impl MemoryStore {
    pub fn failing_at(step: SeedStep) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::default()
        }
    }

    pub fn counts(&self) -> (usize, usize, usize, usize) {
        (
            self.companies.len(),
            self.methods.len(),
            self.communications.len(),
            self.notifications.len(),
        )
    }

    fn check(&self, step: SeedStep) -> DbResult<()> {
        if self.fail_at == Some(step) {
            return Err(database_error(
                DatabaseErrorKind::ClosedConnection,
                format!("injected failure at {step}"),
            ));
        }
        Ok(())
    }
}

fn database_error(kind: DatabaseErrorKind, message: String) -> DbError {
    DbError::DatabaseError(DieselError::DatabaseError(kind, Box::new(message)))
}

fn missing(reference: &str, id: uuid::Uuid) -> DbError {
    database_error(
        DatabaseErrorKind::ForeignKeyViolation,
        format!("{reference} {id} does not exist"),
    )
}

impl SeedStore for MemoryStore {
    async fn clear(&mut self) -> DbResult<usize> {
        self.check(SeedStep::Reset)?;
        let (a, b, c, d) = self.counts();
        self.notifications.clear();
        self.communications.clear();
        self.methods.clear();
        self.companies.clear();
        Ok(a + b + c + d)
    }

    async fn insert_companies(&mut self, rows: &[NewCompany]) -> DbResult<Vec<Company>> {
        self.check(SeedStep::Companies)?;
        let inserted: Vec<Company> = rows
            .iter()
            .map(|row| Company {
                id: row.id,
                name: row.fields.name.clone(),
                location: row.fields.location.clone(),
                linked_in: row.fields.linked_in.clone(),
                emails: row.fields.emails.clone(),
                phone_numbers: row.fields.phone_numbers.clone(),
                comments: row.fields.comments.clone(),
                periodicity: row.fields.periodicity.clone(),
                updated_at: Utc::now(),
            })
            .collect();
        self.companies.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn insert_methods(
        &mut self,
        rows: &[NewCommunicationMethod],
    ) -> DbResult<Vec<CommunicationMethod>> {
        self.check(SeedStep::CommunicationMethods)?;
        let inserted: Vec<CommunicationMethod> = rows
            .iter()
            .map(|row| CommunicationMethod {
                id: row.id,
                name: row.fields.name.clone(),
                description: row.fields.description.clone(),
                sequence: row.fields.sequence,
                mandatory: row.fields.mandatory,
                updated_at: Utc::now(),
            })
            .collect();
        self.methods.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn insert_communications(
        &mut self,
        rows: &[NewCommunication],
    ) -> DbResult<Vec<Communication>> {
        self.check(SeedStep::Communications)?;
        for row in rows {
            if !self.companies.iter().any(|c| c.id == row.fields.company_id) {
                return Err(missing("company", row.fields.company_id));
            }
            if !self.methods.iter().any(|m| m.id == row.fields.method_id) {
                return Err(missing("communication method", row.fields.method_id));
            }
        }
        let inserted: Vec<Communication> = rows
            .iter()
            .map(|row| Communication {
                id: row.id,
                company_id: row.fields.company_id,
                method_id: row.fields.method_id,
                date: row.fields.date,
                notes: row.fields.notes.clone(),
                updated_at: Utc::now(),
            })
            .collect();
        self.communications.extend(inserted.iter().cloned());
        Ok(inserted)
    }

    async fn insert_notifications(
        &mut self,
        rows: &[NewNotification],
    ) -> DbResult<Vec<Notification>> {
        self.check(SeedStep::Notifications)?;
        for row in rows {
            if !self.companies.iter().any(|c| c.id == row.fields.company_id) {
                return Err(missing("company", row.fields.company_id));
            }
            if !self
                .communications
                .iter()
                .any(|c| c.id == row.fields.communication_id)
            {
                return Err(missing("communication", row.fields.communication_id));
            }
        }
        let inserted: Vec<Notification> = rows
            .iter()
            .map(|row| Notification {
                id: row.id,
                user_id: row.fields.user_id,
                company_id: row.fields.company_id,
                communication_id: row.fields.communication_id,
                kind: row.fields.kind,
                message: row.fields.message.clone(),
                updated_at: Utc::now(),
            })
            .collect();
        self.notifications.extend(inserted.iter().cloned());
        Ok(inserted)
    }
}
