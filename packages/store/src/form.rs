//! # Edit forms: record fields ⇄ form fields
//!
//! Each modal on the dashboard is backed by one of the form models below.
//! A form is built either empty (add mode) or from a fetched record (edit
//! mode), edited through the UI, validated, and turned into the
//! form-encoded field list the backend expects.
//!
//! | Form | Endpoint | Actions |
//! |------|----------|---------|
//! | [`VisitorForm`] | `/api/visitors` | `add`, `update` |
//! | [`ExitForm`] | `/api/visitors` | `exit` |
//! | [`UserForm`] | `/api/users` | `add`, `update` |
//!
//! Validation is deliberately minimal: required fields must be non-blank.
//! Everything else is left to the server.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::{User, Visitor, VisitorType};
use crate::text;

/// A form-encoded request body.
pub type FormFields = Vec<(&'static str, String)>;

/// A required field was left blank. Carries the message to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FormError(pub &'static str);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    /// Value of the `action` field.
    pub fn action(self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit => "update",
        }
    }
}

/// Body for deleting a record by id.
pub fn delete_fields(id: u64) -> FormFields {
    vec![("action", "delete".to_string()), ("id", id.to_string())]
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisitorForm {
    pub mode: FormMode,
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub plate: String,
    pub visitor_type: VisitorType,
    pub entry_date: String,
    pub entry_time: String,
    pub exit_time: String,
}

impl VisitorForm {
    /// Empty form with the entry defaulted to `now`.
    pub fn add(now: NaiveDateTime) -> Self {
        Self {
            mode: FormMode::Add,
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            plate: String::new(),
            visitor_type: VisitorType::default(),
            entry_date: now.format("%Y-%m-%d").to_string(),
            entry_time: now.format("%H:%M").to_string(),
            exit_time: String::new(),
        }
    }

    pub fn edit(visitor: &Visitor) -> Self {
        let (split_date, split_time) = split_datetime(&visitor.entry_datetime);
        let exit_time = visitor.exit_time.clone().or_else(|| {
            visitor
                .exit_datetime
                .as_deref()
                .map(|at| split_datetime(at).1)
        });
        Self {
            mode: FormMode::Edit,
            id: Some(visitor.id),
            first_name: visitor.first_name.clone(),
            last_name: visitor.last_name.clone(),
            company: visitor.company.clone().unwrap_or_default(),
            plate: visitor.plate.clone().unwrap_or_default(),
            visitor_type: visitor.visitor_type.clone(),
            entry_date: visitor.entry_date.clone().unwrap_or(split_date),
            entry_time: visitor.entry_time.clone().unwrap_or(split_time),
            exit_time: exit_time.unwrap_or_default(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Ziyaretçi Ekle",
            FormMode::Edit => "Ziyaretçi Düzenle",
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.first_name) || blank(&self.last_name) {
            return Err(FormError(text::NAME_REQUIRED));
        }
        if blank(&self.entry_date) || blank(&self.entry_time) {
            return Err(FormError(text::ENTRY_REQUIRED));
        }
        Ok(())
    }

    pub fn to_fields(&self) -> FormFields {
        let mut fields = vec![("action", self.mode.action().to_string())];
        if let Some(id) = self.id {
            fields.push(("id", id.to_string()));
        }
        fields.extend([
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
            ("company", self.company.clone()),
            ("plate", self.plate.clone()),
            ("visitorType", self.visitor_type.code().to_string()),
            ("entryDate", self.entry_date.clone()),
            ("entryTime", self.entry_time.clone()),
            ("exitTime", self.exit_time.clone()),
        ]);
        fields
    }
}

/// Records the moment an active visitor leaves.
#[derive(Clone, Debug, PartialEq)]
pub struct ExitForm {
    pub id: u64,
    pub visitor_name: String,
    pub exit_time: String,
}

impl ExitForm {
    pub fn new(visitor: &Visitor, now: NaiveDateTime) -> Self {
        Self {
            id: visitor.id,
            visitor_name: visitor.full_name(),
            exit_time: now.format("%H:%M").to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.exit_time) {
            return Err(FormError(text::EXIT_TIME_REQUIRED));
        }
        Ok(())
    }

    pub fn to_fields(&self) -> FormFields {
        vec![
            ("action", "exit".to_string()),
            ("id", self.id.to_string()),
            ("exit_time", self.exit_time.clone()),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserForm {
    pub mode: FormMode,
    pub id: Option<u64>,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl UserForm {
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            id: None,
            username: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            is_admin: false,
        }
    }

    /// The password is never prefilled; leaving it blank keeps the old one.
    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit,
            id: Some(user.id),
            username: user.username.clone(),
            password: String::new(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_admin: user.is_admin,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Kullanıcı Ekle",
            FormMode::Edit => "Kullanıcı Düzenle",
        }
    }

    pub fn password_required(&self) -> bool {
        self.mode == FormMode::Add
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if blank(&self.username) || blank(&self.first_name) || blank(&self.last_name) {
            return Err(FormError(text::USER_FIELDS_REQUIRED));
        }
        if self.password_required() && blank(&self.password) {
            return Err(FormError(text::PASSWORD_REQUIRED));
        }
        Ok(())
    }

    pub fn to_fields(&self) -> FormFields {
        let mut fields = vec![("action", self.mode.action().to_string())];
        if let Some(id) = self.id {
            fields.push(("id", id.to_string()));
        }
        fields.extend([
            ("username", self.username.clone()),
            ("password", self.password.clone()),
            ("firstName", self.first_name.clone()),
            ("lastName", self.last_name.clone()),
        ]);
        // Checkbox semantics: the field is present only when ticked.
        if self.is_admin {
            fields.push(("isAdmin", "on".to_string()));
        }
        fields
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn split_datetime(raw: &str) -> (String, String) {
    match raw.split_once(' ') {
        Some((date, time)) => (date.to_string(), time.to_string()),
        None => (raw.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn field<'a>(fields: &'a FormFields, name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    fn fetched_visitor() -> Visitor {
        Visitor {
            id: 12,
            first_name: "ALI".to_string(),
            last_name: "VELI".to_string(),
            company: Some("ACME".to_string()),
            plate: None,
            visitor_type: VisitorType::Staff,
            entry_datetime: "2024-01-01 09:00".to_string(),
            exit_datetime: Some("2024-01-01 17:45".to_string()),
            creator_id: Some(1),
            creator_name: String::new(),
            visit_date: Some("2024-01-01".to_string()),
            created_at: None,
            entry_date: None,
            entry_time: None,
            exit_time: None,
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(8, 7, 30)
            .unwrap()
    }

    #[test]
    fn test_add_defaults_entry_to_now() {
        let form = VisitorForm::add(now());
        assert_eq!(form.entry_date, "2024-05-06");
        assert_eq!(form.entry_time, "08:07");
        assert!(form.first_name.is_empty());
        assert_eq!(form.id, None);
        assert_eq!(field(&form.to_fields(), "action"), Some("add"));
        assert_eq!(field(&form.to_fields(), "id"), None);
    }

    #[test]
    fn test_visitor_edit_round_trip() {
        let visitor = fetched_visitor();
        let form = VisitorForm::edit(&visitor);
        let fields = form.to_fields();

        assert_eq!(field(&fields, "action"), Some("update"));
        assert_eq!(field(&fields, "id"), Some("12"));
        assert_eq!(field(&fields, "firstName"), Some("ALI"));
        assert_eq!(field(&fields, "lastName"), Some("VELI"));
        assert_eq!(field(&fields, "company"), Some("ACME"));
        assert_eq!(field(&fields, "plate"), Some(""));
        assert_eq!(field(&fields, "visitorType"), Some("personel"));
        assert_eq!(field(&fields, "entryDate"), Some("2024-01-01"));
        assert_eq!(field(&fields, "entryTime"), Some("09:00"));
        assert_eq!(field(&fields, "exitTime"), Some("17:45"));

        // Rebuilding from the same record yields the same form.
        assert_eq!(VisitorForm::edit(&visitor), form);
    }

    #[test]
    fn test_edit_prefers_presplit_fields() {
        let mut visitor = fetched_visitor();
        visitor.entry_date = Some("2024-01-02".to_string());
        visitor.entry_time = Some("10:15".to_string());
        visitor.exit_time = Some("11:00".to_string());

        let form = VisitorForm::edit(&visitor);
        assert_eq!(form.entry_date, "2024-01-02");
        assert_eq!(form.entry_time, "10:15");
        assert_eq!(form.exit_time, "11:00");
    }

    #[test]
    fn test_visitor_validation() {
        let mut form = VisitorForm::add(now());
        assert_eq!(form.validate(), Err(FormError(text::NAME_REQUIRED)));

        form.first_name = "Ali".to_string();
        form.last_name = "  ".to_string();
        assert_eq!(form.validate(), Err(FormError(text::NAME_REQUIRED)));

        form.last_name = "Veli".to_string();
        form.entry_time.clear();
        assert_eq!(form.validate(), Err(FormError(text::ENTRY_REQUIRED)));

        form.entry_time = "09:00".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_exit_form() {
        let form = ExitForm::new(&fetched_visitor(), now());
        assert_eq!(form.visitor_name, "ALI VELI");
        assert_eq!(
            form.to_fields(),
            vec![
                ("action", "exit".to_string()),
                ("id", "12".to_string()),
                ("exit_time", "08:07".to_string()),
            ]
        );
    }

    #[test]
    fn test_user_edit_round_trip_clears_password() {
        let user = User {
            id: 4,
            username: "ayse".to_string(),
            first_name: "AYŞE".to_string(),
            last_name: "KAYA".to_string(),
            is_admin: true,
            created_at: None,
        };
        let form = UserForm::edit(&user);
        assert!(form.password.is_empty());
        assert!(!form.password_required());

        let fields = form.to_fields();
        assert_eq!(field(&fields, "id"), Some("4"));
        assert_eq!(field(&fields, "username"), Some("ayse"));
        assert_eq!(field(&fields, "firstName"), Some("AYŞE"));
        assert_eq!(field(&fields, "lastName"), Some("KAYA"));
        assert_eq!(field(&fields, "isAdmin"), Some("on"));
        assert_eq!(field(&fields, "password"), Some(""));
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_user_validation() {
        let mut form = UserForm::add();
        assert!(form.password_required());
        assert_eq!(form.validate(), Err(FormError(text::USER_FIELDS_REQUIRED)));

        form.username = "mehmet".to_string();
        form.first_name = "Mehmet".to_string();
        form.last_name = "Demir".to_string();
        assert_eq!(form.validate(), Err(FormError(text::PASSWORD_REQUIRED)));

        form.password = "secret".to_string();
        assert_eq!(form.validate(), Ok(()));
        assert_eq!(field(&form.to_fields(), "isAdmin"), None);
    }
}
