//! Database enum types with Diesel serialization.
//!
//! Each enum implements `ToSql` and `FromSql` for automatic conversion between
//! Rust and `PostgreSQL` text columns guarded by CHECK constraints.

use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;

/// Reminder classification for a notification.
///
/// Maps to `notification.kind` CHECK constraint. The JSON and database
/// spellings are identical (`"overdue"`, `"due today"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsExpression,
    FromSqlRow,
    serde::Serialize,
    serde::Deserialize,
)]
#[diesel(sql_type = Text)]
pub enum NotificationKind {
    #[serde(rename = "overdue")]
    Overdue,
    #[serde(rename = "due today")]
    DueToday,
}

impl ToSql<Text, Pg> for NotificationKind {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for NotificationKind {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"overdue" => Ok(Self::Overdue),
            b"due today" => Ok(Self::DueToday),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl NotificationKind {
    /// Returns the database string representation of this notification kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due today",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
