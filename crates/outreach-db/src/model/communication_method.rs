use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Outreach channel. `sequence` orders channels; `mandatory` marks the ones
/// every company must go through.
#[derive(
    Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::communication_method)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct CommunicationMethod {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sequence: i32,
    pub mandatory: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::communication_method)]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationMethodFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sequence: i32,
    #[serde(default)]
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::communication_method)]
pub struct NewCommunicationMethod {
    pub id: uuid::Uuid,
    #[diesel(embed)]
    pub fields: CommunicationMethodFields,
}

impl NewCommunicationMethod {
    #[must_use]
    pub fn new(fields: CommunicationMethodFields) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            fields,
        }
    }
}
