//! Demo dataset and its resolution into insertable rows.
//!
//! Fixture rows refer to each other by stable keys: communications name their
//! company and method, notifications name their company and point at a
//! communication by its position in the communication list. [`Fixture::plan`]
//! resolves every key up front so a bad fixture fails before anything is
//! written.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use outreach_db::model::communication::{CommunicationFields, NewCommunication};
use outreach_db::model::communication_method::{
    CommunicationMethodFields, NewCommunicationMethod,
};
use outreach_db::model::company::{CompanyFields, NewCompany};
use outreach_db::model::notification::{NewNotification, NotificationFields, NotificationKind};

use super::SeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyFixture {
    pub name: &'static str,
    pub location: &'static str,
    pub linked_in: &'static str,
    pub emails: &'static [&'static str],
    pub phone_numbers: &'static [&'static str],
    pub comments: &'static str,
    pub periodicity: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub sequence: i32,
    pub mandatory: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunicationFixture {
    pub company: &'static str,
    pub method: &'static str,
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationFixture {
    /// 24-digit hexadecimal account id issued by the user directory.
    pub user: &'static str,
    pub company: &'static str,
    /// Position in [`Fixture::communications`].
    pub communication: usize,
    pub kind: NotificationKind,
    pub message: &'static str,
}

const USER_A: &str = "6748460ea8ccd99f8fae3010";
const USER_B: &str = "67484f7b1ebb59a6291f394d";

pub const COMPANIES: &[CompanyFixture] = &[
    CompanyFixture {
        name: "Vasu Technologies",
        location: "Delhi",
        linked_in: "https://linkedin.com/company/vasutechnologies",
        emails: &["contact@vasutech.com"],
        phone_numbers: &["+91 123 456 7890"],
        comments: "Leading tech company in India.",
        periodicity: "1 month",
    },
    CompanyFixture {
        name: "Ansh Innovations",
        location: "Mumbai",
        linked_in: "https://linkedin.com/company/anshinnovations",
        emails: &["info@anshinnovations.com"],
        phone_numbers: &["+91 987 654 3210"],
        comments: "Innovative solutions for startups.",
        periodicity: "2 weeks",
    },
    CompanyFixture {
        name: "Daksh Systems",
        location: "Bangalore",
        linked_in: "https://linkedin.com/company/dakshsystems",
        emails: &["support@dakshsystems.com"],
        phone_numbers: &["+91 999 888 7777"],
        comments: "Specializing in cloud-based solutions.",
        periodicity: "1 month",
    },
    CompanyFixture {
        name: "Shahil Enterprises",
        location: "Chennai",
        linked_in: "https://linkedin.com/company/shahilenterprises",
        emails: &["contact@shahilenterprises.com"],
        phone_numbers: &["+91 777 666 5555"],
        comments: "Diversified business conglomerate.",
        periodicity: "3 weeks",
    },
    CompanyFixture {
        name: "Tanya Technologies",
        location: "Hyderabad",
        linked_in: "https://linkedin.com/company/tanyatechnologies",
        emails: &["info@tanyatech.com"],
        phone_numbers: &["+91 111 222 3333"],
        comments: "Software and app development services.",
        periodicity: "2 weeks",
    },
    CompanyFixture {
        name: "Janvi Solutions",
        location: "Kolkata",
        linked_in: "https://linkedin.com/company/janvisolutions",
        emails: &["support@janvisolutions.com"],
        phone_numbers: &["+91 444 555 6666"],
        comments: "Consulting and IT services.",
        periodicity: "1 month",
    },
];

pub const METHODS: &[MethodFixture] = &[
    MethodFixture {
        name: "LinkedIn Post",
        description: "Post on LinkedIn",
        sequence: 1,
        mandatory: true,
    },
    MethodFixture {
        name: "LinkedIn Message",
        description: "Direct LinkedIn message",
        sequence: 2,
        mandatory: true,
    },
    MethodFixture {
        name: "Email",
        description: "Send an email",
        sequence: 3,
        mandatory: true,
    },
    MethodFixture {
        name: "Phone Call",
        description: "Make a phone call",
        sequence: 4,
        mandatory: false,
    },
    MethodFixture {
        name: "Other",
        description: "Any other communication",
        sequence: 5,
        mandatory: false,
    },
];

pub const COMMUNICATIONS: &[CommunicationFixture] = &[
    CommunicationFixture {
        company: "Vasu Technologies",
        method: "LinkedIn Post",
        date: "2024-12-02",
        notes: "Introductory post on LinkedIn for Vasu Technologies.",
    },
    CommunicationFixture {
        company: "Vasu Technologies",
        method: "Email",
        date: "2024-11-30",
        notes: "Follow-up email sent to Vasu Technologies.",
    },
    CommunicationFixture {
        company: "Vasu Technologies",
        method: "Phone Call",
        date: "2024-11-29",
        notes: "Call to Vasu Technologies regarding partnership.",
    },
    CommunicationFixture {
        company: "Ansh Innovations",
        method: "LinkedIn Message",
        date: "2024-11-28",
        notes: "Message to Ansh Innovations on LinkedIn.",
    },
    CommunicationFixture {
        company: "Ansh Innovations",
        method: "Email",
        date: "2024-12-01",
        notes: "Follow-up email to Ansh Innovations.",
    },
    CommunicationFixture {
        company: "Ansh Innovations",
        method: "LinkedIn Post",
        date: "2024-12-02",
        notes: "LinkedIn Post to promote Ansh Innovations.",
    },
    CommunicationFixture {
        company: "Daksh Systems",
        method: "Phone Call",
        date: "2024-12-03",
        notes: "Phone call to Daksh Systems for a business discussion.",
    },
    CommunicationFixture {
        company: "Shahil Enterprises",
        method: "LinkedIn Post",
        date: "2024-11-25",
        notes: "Post for Shahil Enterprises' new product launch.",
    },
    CommunicationFixture {
        company: "Tanya Technologies",
        method: "LinkedIn Message",
        date: "2024-11-22",
        notes: "LinkedIn Message to Tanya Technologies for a potential partnership.",
    },
    CommunicationFixture {
        company: "Janvi Solutions",
        method: "Email",
        date: "2024-11-19",
        notes: "Email communication to Janvi Solutions about project updates.",
    },
];

pub const NOTIFICATIONS: &[NotificationFixture] = &[
    NotificationFixture {
        user: USER_A,
        company: "Vasu Technologies",
        communication: 0,
        kind: NotificationKind::Overdue,
        message: "Vasu Technologies LinkedIn Post communication is overdue.",
    },
    NotificationFixture {
        user: USER_A,
        company: "Vasu Technologies",
        communication: 1,
        kind: NotificationKind::DueToday,
        message: "Email follow-up to Vasu Technologies is due today.",
    },
    NotificationFixture {
        user: USER_A,
        company: "Vasu Technologies",
        communication: 2,
        kind: NotificationKind::DueToday,
        message: "Phone call to Vasu Technologies is due today.",
    },
    NotificationFixture {
        user: USER_B,
        company: "Ansh Innovations",
        communication: 1,
        kind: NotificationKind::DueToday,
        message: "LinkedIn Message to Ansh Innovations is due today.",
    },
    NotificationFixture {
        user: USER_B,
        company: "Ansh Innovations",
        communication: 2,
        kind: NotificationKind::Overdue,
        message: "Follow-up email to Ansh Innovations is overdue.",
    },
    NotificationFixture {
        user: USER_B,
        company: "Shahil Enterprises",
        communication: 3,
        kind: NotificationKind::DueToday,
        message: "Shahil Enterprises LinkedIn Post due today.",
    },
];

/// A complete dataset to seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub companies: Vec<CompanyFixture>,
    pub methods: Vec<MethodFixture>,
    pub communications: Vec<CommunicationFixture>,
    pub notifications: Vec<NotificationFixture>,
}

impl Fixture {
    /// The demo dataset shipped with the loader.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            companies: COMPANIES.to_vec(),
            methods: METHODS.to_vec(),
            communications: COMMUNICATIONS.to_vec(),
            notifications: NOTIFICATIONS.to_vec(),
        }
    }

    /// ## Summary
    /// Assigns identifiers to every row and resolves every cross reference.
    ///
    /// ## Errors
    /// Returns `SeedError::Validation` for duplicate keys, unknown company or
    /// method names, out-of-range communication positions, unparseable dates
    /// or malformed user ids.
    pub fn plan(&self) -> Result<SeedPlan, SeedError> {
        let companies: Vec<NewCompany> = self.companies.iter().map(company_row).collect();
        let company_ids = index_by_key(
            "company",
            companies.iter().map(|c| (c.fields.name.as_str(), c.id)),
        )?;

        let methods: Vec<NewCommunicationMethod> = self.methods.iter().map(method_row).collect();
        let method_ids = index_by_key(
            "communication method",
            methods.iter().map(|m| (m.fields.name.as_str(), m.id)),
        )?;

        let communications = self
            .communications
            .iter()
            .enumerate()
            .map(|(position, fixture)| {
                communication_row(position, fixture, &company_ids, &method_ids)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let notifications = self
            .notifications
            .iter()
            .enumerate()
            .map(|(position, fixture)| {
                notification_row(position, fixture, &company_ids, &communications)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeedPlan {
            companies,
            methods,
            communications,
            notifications,
        })
    }
}

/// Fully resolved rows, ready to insert in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub companies: Vec<NewCompany>,
    pub methods: Vec<NewCommunicationMethod>,
    pub communications: Vec<NewCommunication>,
    pub notifications: Vec<NewNotification>,
}

/// ## Summary
/// Maps a 24-digit hexadecimal account id onto a stable UUID.
///
/// The same input always yields the same UUID, so notifications seeded on
/// different runs address the same user.
///
/// ## Errors
/// Returns `SeedError::Validation` if `legacy` is not 24 hex digits.
pub fn user_id_from_legacy(legacy: &str) -> Result<Uuid, SeedError> {
    if legacy.len() != 24 || !legacy.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SeedError::Validation(format!(
            "user id '{legacy}' is not a 24-digit hexadecimal id"
        )));
    }
    Ok(Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        legacy.to_ascii_lowercase().as_bytes(),
    ))
}

fn index_by_key<'a>(
    entity: &str,
    keys: impl Iterator<Item = (&'a str, Uuid)>,
) -> Result<HashMap<&'a str, Uuid>, SeedError> {
    let mut index = HashMap::new();
    for (key, id) in keys {
        if index.insert(key, id).is_some() {
            return Err(SeedError::Validation(format!("duplicate {entity} key '{key}'")));
        }
    }
    Ok(index)
}

fn lookup(
    index: &HashMap<&str, Uuid>,
    entity: &str,
    key: &str,
    row: &str,
) -> Result<Uuid, SeedError> {
    index.get(key).copied().ok_or_else(|| {
        SeedError::Validation(format!("{row} references unknown {entity} '{key}'"))
    })
}

fn company_row(fixture: &CompanyFixture) -> NewCompany {
    NewCompany::new(CompanyFields {
        name: fixture.name.to_string(),
        location: Some(fixture.location.to_string()),
        linked_in: Some(fixture.linked_in.to_string()),
        emails: fixture.emails.iter().map(ToString::to_string).collect(),
        phone_numbers: fixture
            .phone_numbers
            .iter()
            .map(ToString::to_string)
            .collect(),
        comments: Some(fixture.comments.to_string()),
        periodicity: Some(fixture.periodicity.to_string()),
    })
}

fn method_row(fixture: &MethodFixture) -> NewCommunicationMethod {
    NewCommunicationMethod::new(CommunicationMethodFields {
        name: fixture.name.to_string(),
        description: Some(fixture.description.to_string()),
        sequence: fixture.sequence,
        mandatory: fixture.mandatory,
    })
}

fn communication_row(
    position: usize,
    fixture: &CommunicationFixture,
    company_ids: &HashMap<&str, Uuid>,
    method_ids: &HashMap<&str, Uuid>,
) -> Result<NewCommunication, SeedError> {
    let row = format!("communication #{position}");
    let date = NaiveDate::parse_from_str(fixture.date, "%Y-%m-%d").map_err(|e| {
        SeedError::Validation(format!("{row} has invalid date '{}': {e}", fixture.date))
    })?;

    Ok(NewCommunication::new(CommunicationFields {
        company_id: lookup(company_ids, "company", fixture.company, &row)?,
        method_id: lookup(method_ids, "communication method", fixture.method, &row)?,
        date,
        notes: Some(fixture.notes.to_string()),
    }))
}

fn notification_row(
    position: usize,
    fixture: &NotificationFixture,
    company_ids: &HashMap<&str, Uuid>,
    communications: &[NewCommunication],
) -> Result<NewNotification, SeedError> {
    let row = format!("notification #{position}");
    let communication = communications.get(fixture.communication).ok_or_else(|| {
        SeedError::Validation(format!(
            "{row} references communication #{} but only {} exist",
            fixture.communication,
            communications.len()
        ))
    })?;

    Ok(NewNotification::new(NotificationFields {
        user_id: user_id_from_legacy(fixture.user)?,
        company_id: lookup(company_ids, "company", fixture.company, &row)?,
        communication_id: communication.id,
        kind: fixture.kind,
        message: fixture.message.to_string(),
    }))
}
