use std::future::Future;

use store::{text, Debouncer, NoticeKind, NoticeSlot, RecordStore, User, UserForm, PRIMARY_ADMIN_ID};

use crate::error::SyncError;
use crate::state::{notify, report, StateCell};
use crate::sync::DashboardApi;
use crate::transport::Transport;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPageState {
    pub users: RecordStore<User>,
    pub user_form: Option<UserForm>,
    edits: Debouncer,
    pub busy: bool,
}

/// Handlers of the user management page. No periodic refresh here; the
/// list reloads on mount and after each successful write.
#[derive(Clone, Debug)]
pub struct UserPage<T, S, N> {
    api: DashboardApi<T>,
    state: S,
    notices: N,
}

impl<T, S, N> UserPage<T, S, N>
where
    T: Transport,
    S: StateCell<UserPageState>,
    N: StateCell<NoticeSlot>,
{
    pub fn new(api: DashboardApi<T>, state: S, notices: N) -> Self {
        Self {
            api,
            state,
            notices,
        }
    }

    pub async fn reload(&self) {
        let ticket = self.state.update(|s| s.users.begin_reload());
        match self.api.list_users().await {
            Ok(list) => {
                if !self.state.update(|s| s.users.apply(ticket, list)) {
                    tracing::debug!("dropping stale user list");
                }
            }
            Err(err) => report(&self.notices, &err, text::LOAD_USERS),
        }
    }

    pub fn open_add(&self) {
        self.state.update(|s| {
            s.edits.arm();
            s.user_form = Some(UserForm::add());
        });
    }

    pub fn open_edit(&self, id: u64) -> impl Future<Output = ()> + 'static
    where
        T: Clone + 'static,
        S: Clone + 'static,
        N: Clone + 'static,
    {
        let ticket = self.state.update(|s| s.edits.arm());
        let page = self.clone();
        async move {
            match page.api.get_user(id).await {
                Ok(user) => page.state.update(|s| {
                    if s.edits.is_current(ticket) {
                        s.user_form = Some(UserForm::edit(&user));
                    }
                }),
                Err(err) => report(&page.notices, &err, text::GET_USER),
            }
        }
    }

    pub async fn save(&self, form: UserForm) {
        self.state.update(|s| s.busy = true);
        let result = self.api.save_user(&form).await;
        self.state.update(|s| s.busy = false);
        match result {
            Ok(message) => {
                notify(&self.notices, NoticeKind::Success, message);
                self.close_form();
                self.reload().await;
            }
            Err(err) => report(&self.notices, &err, text::SAVE),
        }
    }

    /// The primary administrator is refused with a warning before any
    /// prompt; anyone else is deleted once `confirm` agrees.
    pub async fn delete(&self, id: u64, confirm: impl FnOnce(&str) -> bool) {
        if id == PRIMARY_ADMIN_ID {
            let err = SyncError::Protected(text::PRIMARY_ADMIN_PROTECTED);
            report(&self.notices, &err, text::DELETE);
            return;
        }
        let prompt = self.state.with(|s| {
            s.users
                .find(id)
                .map(|u| text::delete_user_prompt(&u.full_name(), &u.username))
        });
        let Some(prompt) = prompt else {
            tracing::warn!("delete requested for unknown user {id}");
            return;
        };
        if !confirm(&prompt) {
            return;
        }
        match self.api.delete_user(id).await {
            Ok(message) => {
                notify(&self.notices, NoticeKind::Success, message);
                self.reload().await;
            }
            Err(err) => report(&self.notices, &err, text::DELETE),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::memory::ScriptedTransport;
    use crate::state::SharedState;
    use crate::sync::USERS_PATH;
    use serde_json::{json, Value};

    type Page = UserPage<ScriptedTransport, SharedState<UserPageState>, SharedState<NoticeSlot>>;

    fn page() -> (Page, ScriptedTransport, SharedState<UserPageState>, SharedState<NoticeSlot>) {
        let transport = ScriptedTransport::new();
        let state = SharedState::default();
        let notices = SharedState::default();
        let page = UserPage::new(
            DashboardApi::new(transport.clone()),
            state.clone(),
            notices.clone(),
        );
        (page, transport, state, notices)
    }

    fn user_json(id: u64, username: &str, is_admin: bool) -> Value {
        json!({
            "id": id,
            "username": username,
            "first_name": "ERHAN",
            "last_name": "YAMAN",
            "is_admin": is_admin,
            "created_at": "2024-01-01T09:00:00"
        })
    }

    fn list_reply() -> Value {
        json!({"success": true, "data": [user_json(1, "admin", true), user_json(2, "erhan", false)]})
    }

    fn current_notice(notices: &SharedState<NoticeSlot>) -> Option<(NoticeKind, String)> {
        notices.with(|n| n.current().map(|n| (n.kind, n.message.clone())))
    }

    #[tokio::test]
    async fn test_primary_admin_delete_warns_without_prompt() {
        let (page, transport, state, notices) = page();
        transport.reply(list_reply());
        page.reload().await;

        let prompted = Cell::new(false);
        page.delete(1, |_| {
            prompted.set(true);
            true
        })
        .await;

        assert!(!prompted.get());
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Warning, text::PRIMARY_ADMIN_PROTECTED.to_string()))
        );
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(state.snapshot().users.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_user_reloads() {
        let (page, transport, state, _notices) = page();
        transport
            .reply(list_reply())
            .reply(json!({"success": true, "data": "Kullanıcı silindi"}))
            .reply(json!({"success": true, "data": [user_json(1, "admin", true)]}));
        page.reload().await;

        let mut asked = String::new();
        page.delete(2, |prompt| {
            asked = prompt.to_string();
            true
        })
        .await;

        assert!(asked.contains("(erhan)"));
        assert_eq!(state.snapshot().users.len(), 1);
        let delete = &transport.requests()[1];
        assert_eq!(delete.path, USERS_PATH);
        assert_eq!(delete.param("id"), Some("2"));
    }

    #[tokio::test]
    async fn test_save_closes_form_and_reloads() {
        let (page, transport, state, notices) = page();
        transport
            .reply(json!({"success": true, "data": "Kullanıcı eklendi"}))
            .reply(list_reply());

        page.open_add();
        let mut form = state.snapshot().user_form.unwrap();
        form.username = "erhan".to_string();
        form.password = "gizli".to_string();
        form.first_name = "Erhan".to_string();
        form.last_name = "Yaman".to_string();
        page.save(form).await;

        let after = state.snapshot();
        assert_eq!(after.user_form, None);
        assert_eq!(after.users.len(), 2);
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Success, "Kullanıcı eklendi".to_string()))
        );
        assert_eq!(transport.requests()[0].param("action"), Some("add"));
    }

    #[tokio::test]
    async fn test_invalid_form_stays_open() {
        let (page, transport, state, notices) = page();

        page.open_add();
        let form = state.snapshot().user_form.unwrap();
        page.save(form).await;

        assert!(state.snapshot().user_form.is_some());
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Failure, text::USER_FIELDS_REQUIRED.to_string()))
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_closed_form_ignores_late_user() {
        let (page, transport, state, _notices) = page();
        transport.reply(json!({"success": true, "data": user_json(2, "erhan", false)}));

        let pending = page.open_edit(2);
        page.close_form();
        pending.await;

        assert_eq!(state.snapshot().user_form, None);
        assert_eq!(transport.requests()[0].param("action"), Some("get"));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_users() {
        let (page, transport, state, notices) = page();
        transport.reply(list_reply()).fail("timeout");

        page.reload().await;
        page.reload().await;

        assert_eq!(state.snapshot().users.len(), 2);
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Failure, text::LOAD_USERS.transport.to_string()))
        );
    }
}
