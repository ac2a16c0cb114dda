//! # Record models: what the backend sends
//!
//! The dashboard backend answers every read with a JSON envelope whose `data`
//! field carries one of the records below. The client never owns these
//! records; it keeps a disposable copy that is replaced on each reload.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Visitor`] | One logged facility visit. Active while `exit_datetime` is absent. |
//! | [`VisitorType`] | Visitor category. Known wire codes map to variants, anything else is kept verbatim. |
//! | [`User`] | A dashboard operator. The user with id [`PRIMARY_ADMIN_ID`] is protected. |
//! | [`Stats`] | Daily / monthly / total / active visitor counters. |
//!
//! The backend writes empty strings where a value is missing (company, plate,
//! exit time). Those are normalised to `None` while deserialising so the rest
//! of the crate only has to check for absence.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of the administrator account created with the installation.
pub const PRIMARY_ADMIN_ID: u64 = 1;

/// Common accessor used by the record store to locate records.
pub trait Record {
    fn id(&self) -> u64;
}

/// Category of a visit, as selected in the visitor form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum VisitorType {
    #[default]
    Guest,
    Staff,
    Supplier,
    Courier,
    Other,
    /// A code this client does not know about. Displayed as-is.
    Unknown(String),
}

impl VisitorType {
    /// The selectable categories, in form order.
    pub const ALL: [VisitorType; 5] = [
        VisitorType::Guest,
        VisitorType::Staff,
        VisitorType::Supplier,
        VisitorType::Courier,
        VisitorType::Other,
    ];

    /// Wire code sent in the `visitorType` form field.
    pub fn code(&self) -> &str {
        match self {
            VisitorType::Guest => "misafir",
            VisitorType::Staff => "personel",
            VisitorType::Supplier => "tedarikci",
            VisitorType::Courier => "kurier",
            VisitorType::Other => "diger",
            VisitorType::Unknown(code) => code,
        }
    }

    /// Human readable label shown in tables and exports.
    pub fn label(&self) -> &str {
        match self {
            VisitorType::Guest => "Misafir",
            VisitorType::Staff => "Personel",
            VisitorType::Supplier => "Tedarikçi",
            VisitorType::Courier => "Kurier",
            VisitorType::Other => "Diğer",
            VisitorType::Unknown(code) => code,
        }
    }

    /// Options for a select showing `self`. An unknown code is listed after
    /// the known ones so the current value stays selected.
    pub fn choices(&self) -> Vec<VisitorType> {
        let mut choices = Self::ALL.to_vec();
        if let VisitorType::Unknown(_) = self {
            choices.push(self.clone());
        }
        choices
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "misafir" => VisitorType::Guest,
            "personel" => VisitorType::Staff,
            "tedarikci" => VisitorType::Supplier,
            "kurier" => VisitorType::Courier,
            "diger" => VisitorType::Other,
            other => VisitorType::Unknown(other.to_string()),
        }
    }
}

impl From<Option<String>> for VisitorType {
    fn from(code: Option<String>) -> Self {
        VisitorType::from_code(code.as_deref().unwrap_or_default())
    }
}

impl From<VisitorType> for String {
    fn from(kind: VisitorType) -> Self {
        kind.code().to_string()
    }
}

/// A visitor entry as returned by `/api/visitors`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub plate: Option<String>,
    #[serde(default)]
    pub visitor_type: VisitorType,
    /// `"YYYY-MM-DD HH:MM"`
    pub entry_datetime: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub exit_datetime: Option<String>,
    #[serde(default)]
    pub creator_id: Option<u64>,
    /// Only filled in by the list endpoint.
    #[serde(default)]
    pub creator_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub visit_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub created_at: Option<String>,
    // The single-record endpoint splits the timestamps for the edit form.
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub entry_time: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<String>,
}

impl Visitor {
    /// A visitor is on the premises until an exit time is recorded.
    pub fn is_active(&self) -> bool {
        self.exit_datetime.is_none()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Visitor {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A dashboard account as returned by `/api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_admin: bool,
    /// ISO-8601 creation time, e.g. `"2024-03-01T14:05:09.123456"`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub created_at: Option<String>,
}

impl User {
    /// The installation's first administrator may never be deleted.
    pub fn is_primary_admin(&self) -> bool {
        self.id == PRIMARY_ADMIN_ID
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Counters shown above the visitor table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub daily: u64,
    pub monthly: u64,
    pub total: u64,
    pub active: u64,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
