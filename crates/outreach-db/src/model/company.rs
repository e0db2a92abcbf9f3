use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Outreach target organisation.
#[derive(
    Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::company)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: uuid::Uuid,
    pub name: String,
    pub location: Option<String>,
    pub linked_in: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub comments: Option<String>,
    pub periodicity: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Writable company columns.
///
/// Used as the request body for create and full replacement; absent optional
/// fields are stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::company)]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFields {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub periodicity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::company)]
pub struct NewCompany {
    pub id: uuid::Uuid,
    #[diesel(embed)]
    pub fields: CompanyFields,
}

impl NewCompany {
    /// Assigns a fresh time-ordered identifier to the given fields.
    #[must_use]
    pub fn new(fields: CompanyFields) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            fields,
        }
    }
}
