//! # Table rows: records formatted for display
//!
//! Pure mapping from the record store to the rows the UI paints. Every
//! formatting decision (placeholder dashes, split date/time cells, type
//! labels, which row actions exist) lives here so the components only lay
//! out what they are given.

use chrono::NaiveDateTime;

use crate::models::{User, Visitor};
use crate::text;

/// Shown for any missing optional value.
pub const MISSING: &str = "-";

pub const VISITOR_COLUMNS: [&str; 10] = [
    "ID", "İsim", "Soyisim", "Şirket", "Plaka", "Tür", "Giriş", "Çıkış", "Kaydeden", "İşlemler",
];

pub const USER_COLUMNS: [&str; 7] = [
    "ID", "Kullanıcı Adı", "İsim", "Soyisim", "Yetki", "Oluşturulma", "İşlemler",
];

/// A timestamp rendered as a date line with a smaller time line beneath.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateCell {
    pub date: String,
    pub time: Option<String>,
}

impl DateCell {
    /// Split `"YYYY-MM-DD HH:MM"` at the first space.
    pub fn split(raw: &str) -> Self {
        match raw.split_once(' ') {
            Some((date, time)) => Self {
                date: date.to_string(),
                time: Some(time.to_string()),
            },
            None => Self {
                date: raw.to_string(),
                time: None,
            },
        }
    }

    /// Format an ISO-8601 timestamp the Turkish way (`DD.MM.YYYY` / `HH:MM:SS`).
    /// Unparseable input is shown as-is.
    pub fn from_iso(raw: &str) -> Self {
        match raw.parse::<NaiveDateTime>() {
            Ok(at) => Self {
                date: at.format("%d.%m.%Y").to_string(),
                time: Some(at.format("%H:%M:%S").to_string()),
            },
            Err(_) => Self::split(raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExitCell {
    /// Still on the premises; rendered as a badge.
    Active,
    Left(DateCell),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitorRow {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub plate: String,
    pub type_label: String,
    pub entry: DateCell,
    pub exit: ExitCell,
    pub creator: String,
}

impl VisitorRow {
    pub fn from_visitor(visitor: &Visitor) -> Self {
        Self {
            id: visitor.id,
            first_name: visitor.first_name.clone(),
            last_name: visitor.last_name.clone(),
            company: or_missing(visitor.company.as_deref()),
            plate: or_missing(visitor.plate.as_deref()),
            type_label: visitor.visitor_type.label().to_string(),
            entry: DateCell::split(&visitor.entry_datetime),
            exit: match visitor.exit_datetime.as_deref() {
                Some(at) => ExitCell::Left(DateCell::split(at)),
                None => ExitCell::Active,
            },
            creator: visitor.creator_name.clone(),
        }
    }

    /// The exit action is offered only while the visitor is active.
    pub fn can_exit(&self) -> bool {
        self.exit == ExitCell::Active
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => text::ADMIN_BADGE,
            Role::Member => text::MEMBER_BADGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub created: Option<DateCell>,
    pub can_delete: bool,
}

impl UserRow {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: if user.is_admin { Role::Admin } else { Role::Member },
            created: user.created_at.as_deref().map(DateCell::from_iso),
            can_delete: !user.is_primary_admin(),
        }
    }
}

/// Either one row per record or a single informational row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableView<R> {
    Placeholder(&'static str),
    Rows(Vec<R>),
}

impl<R> TableView<R> {
    /// Number of `<tr>` elements the view paints.
    pub fn row_count(&self) -> usize {
        match self {
            TableView::Placeholder(_) => 1,
            TableView::Rows(rows) => rows.len(),
        }
    }
}

pub fn visitor_table(visitors: &[Visitor]) -> TableView<VisitorRow> {
    if visitors.is_empty() {
        return TableView::Placeholder(text::NO_VISITORS);
    }
    TableView::Rows(visitors.iter().map(VisitorRow::from_visitor).collect())
}

pub fn user_table(users: &[User]) -> TableView<UserRow> {
    if users.is_empty() {
        return TableView::Placeholder(text::NO_USERS);
    }
    TableView::Rows(users.iter().map(UserRow::from_user).collect())
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}
