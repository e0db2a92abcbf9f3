use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// A logged contact with a company through one method on one day.
///
/// JSON keeps the historical field names: `company` for the company id and
/// `type` for the method id.
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
#[diesel(table_name = schema::communication)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(super::company::Company, foreign_key = company_id))]
#[diesel(belongs_to(super::communication_method::CommunicationMethod, foreign_key = method_id))]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: uuid::Uuid,
    #[serde(rename = "company")]
    pub company_id: uuid::Uuid,
    #[serde(rename = "type")]
    pub method_id: uuid::Uuid,
    pub date: chrono::NaiveDate,
    pub notes: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::communication)]
#[diesel(treat_none_as_null = true)]
pub struct CommunicationFields {
    #[serde(rename = "company")]
    pub company_id: uuid::Uuid,
    #[serde(rename = "type")]
    pub method_id: uuid::Uuid,
    pub date: chrono::NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::communication)]
pub struct NewCommunication {
    pub id: uuid::Uuid,
    #[diesel(embed)]
    pub fields: CommunicationFields,
}

impl NewCommunication {
    #[must_use]
    pub fn new(fields: CommunicationFields) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            fields,
        }
    }
}
