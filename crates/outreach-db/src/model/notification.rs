use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

pub use crate::db::enums::NotificationKind;

/// Reminder addressed to a user about a pending communication.
///
/// `user` identifies an account in an external system and is never resolved
/// here.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Identifiable,
    Queryable,
    Selectable,
    Associations,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::notification)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(super::company::Company, foreign_key = company_id))]
#[diesel(belongs_to(super::communication::Communication, foreign_key = communication_id))]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: uuid::Uuid,
    #[serde(rename = "user")]
    pub user_id: uuid::Uuid,
    #[serde(rename = "company")]
    pub company_id: uuid::Uuid,
    #[serde(rename = "communication")]
    pub communication_id: uuid::Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::notification)]
pub struct NotificationFields {
    #[serde(rename = "user")]
    pub user_id: uuid::Uuid,
    #[serde(rename = "company")]
    pub company_id: uuid::Uuid,
    #[serde(rename = "communication")]
    pub communication_id: uuid::Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::notification)]
pub struct NewNotification {
    pub id: uuid::Uuid,
    #[diesel(embed)]
    pub fields: NotificationFields,
}

impl NewNotification {
    #[must_use]
    pub fn new(fields: NotificationFields) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            fields,
        }
    }
}
