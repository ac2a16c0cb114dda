use store::form::{delete_fields, ExitForm, UserForm, VisitorForm};
use store::{text, Stats, User, Visitor};

use crate::envelope::{Envelope, LogoutReply};
use crate::error::SyncError;
use crate::transport::Transport;

pub const STATS_PATH: &str = "/api/stats";
pub const VISITORS_PATH: &str = "/api/visitors";
pub const USERS_PATH: &str = "/api/users";
pub const LOGOUT_PATH: &str = "/logout";

/// Every backend operation the dashboard pages perform.
///
/// Reads return the decoded records; writes return the server's confirmation
/// message. Nothing is retried. Form validation runs before any request is
/// made.
#[derive(Clone, Debug)]
pub struct DashboardApi<T> {
    transport: T,
}

impl<T: Transport> DashboardApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn stats(&self) -> Result<Stats, SyncError> {
        self.read(STATS_PATH, &[]).await
    }

    pub async fn list_visitors(&self) -> Result<Vec<Visitor>, SyncError> {
        self.read(VISITORS_PATH, &[("action", "list".to_string())])
            .await
    }

    pub async fn get_visitor(&self, id: u64) -> Result<Visitor, SyncError> {
        self.read(
            VISITORS_PATH,
            &[("action", "get".to_string()), ("id", id.to_string())],
        )
        .await
    }

    /// Add or update, depending on the form's mode.
    pub async fn save_visitor(&self, form: &VisitorForm) -> Result<String, SyncError> {
        form.validate()?;
        self.write(VISITORS_PATH, &form.to_fields()).await
    }

    pub async fn record_exit(&self, form: &ExitForm) -> Result<String, SyncError> {
        form.validate()?;
        self.write(VISITORS_PATH, &form.to_fields()).await
    }

    pub async fn delete_visitor(&self, id: u64) -> Result<String, SyncError> {
        self.write(VISITORS_PATH, &delete_fields(id)).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, SyncError> {
        self.read(USERS_PATH, &[("action", "list".to_string())]).await
    }

    pub async fn get_user(&self, id: u64) -> Result<User, SyncError> {
        self.read(
            USERS_PATH,
            &[("action", "get".to_string()), ("id", id.to_string())],
        )
        .await
    }

    pub async fn save_user(&self, form: &UserForm) -> Result<String, SyncError> {
        form.validate()?;
        self.write(USERS_PATH, &form.to_fields()).await
    }

    /// The primary administrator is refused without contacting the server.
    pub async fn delete_user(&self, id: u64) -> Result<String, SyncError> {
        if id == store::PRIMARY_ADMIN_ID {
            tracing::warn!("refusing to delete primary administrator");
            return Err(SyncError::Protected(text::PRIMARY_ADMIN_PROTECTED));
        }
        self.write(USERS_PATH, &delete_fields(id)).await
    }

    /// End the session. Returns the page to navigate to.
    pub async fn logout(&self) -> Result<String, SyncError> {
        let body = self.transport.get(LOGOUT_PATH, &[]).await.inspect_err(log_transport)?;
        let reply: LogoutReply = serde_json::from_value(body)?;
        match (reply.success, reply.redirect) {
            (true, Some(redirect)) => Ok(redirect),
            _ => Err(SyncError::Rejected(text::LOGOUT_FAILED.to_string())),
        }
    }

    async fn read<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<R, SyncError> {
        let body = self.transport.get(path, query).await.inspect_err(log_transport)?;
        Envelope::from_value(body)?.into_data()
    }

    async fn write(&self, path: &str, fields: &[(&'static str, String)]) -> Result<String, SyncError> {
        let action = fields
            .iter()
            .find(|(key, _)| *key == "action")
            .map(|(_, value)| value.as_str())
            .unwrap_or_default();
        tracing::info!(path, action, "submitting");
        let body = self
            .transport
            .post_form(path, fields)
            .await
            .inspect_err(log_transport)?;
        Envelope::from_value(body)?.into_message()
    }
}

fn log_transport(err: &SyncError) {
    if let SyncError::Transport(reason) = err {
        tracing::error!("request failed: {reason}");
    }
}
