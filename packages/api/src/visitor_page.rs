use std::future::Future;

use chrono::{NaiveDate, NaiveDateTime};
use store::{
    export_visitors, text, CsvExport, Debouncer, ExitForm, ExportError, NoticeKind, NoticeSlot,
    RecordStore, ReloadTicket, Stats, Visitor, VisitorForm,
};

use crate::state::{notify, report, StateCell};
use crate::sync::DashboardApi;
use crate::transport::Transport;

/// Everything the visitor dashboard shows, apart from the search box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisitorPageState {
    pub visitors: RecordStore<Visitor>,
    pub stats: Stats,
    stats_ticket: Option<ReloadTicket>,
    /// Open add/edit modal.
    pub visitor_form: Option<VisitorForm>,
    /// Open exit modal.
    pub exit_form: Option<ExitForm>,
    /// Latest edit request; an older `get` that resolves late is ignored.
    edits: Debouncer,
    /// A write is in flight.
    pub busy: bool,
}

impl VisitorPageState {
    /// Same rule as the visitor list: counters from an older reload never
    /// replace newer ones.
    pub fn apply_stats(&mut self, ticket: ReloadTicket, stats: Stats) -> bool {
        if self.stats_ticket.is_some_and(|applied| ticket <= applied) {
            return false;
        }
        self.stats_ticket = Some(ticket);
        self.stats = stats;
        true
    }
}

/// Handlers of the visitor dashboard.
///
/// Generic over the transport and over where state and notifications live,
/// so the page runs the same against signals in the browser and plain
/// shared state in tests.
#[derive(Clone, Debug)]
pub struct VisitorPage<T, S, N> {
    api: DashboardApi<T>,
    state: S,
    notices: N,
}

impl<T, S, N> VisitorPage<T, S, N>
where
    T: Transport,
    S: StateCell<VisitorPageState>,
    N: StateCell<NoticeSlot>,
{
    pub fn new(api: DashboardApi<T>, state: S, notices: N) -> Self {
        Self {
            api,
            state,
            notices,
        }
    }

    /// Fetch stats and the visitor list. Replies from a reload that has
    /// been overtaken are dropped; a failure keeps what is shown.
    pub async fn reload(&self) {
        let ticket = self.state.update(|s| s.visitors.begin_reload());

        match self.api.stats().await {
            Ok(stats) => {
                if !self.state.update(|s| s.apply_stats(ticket, stats)) {
                    tracing::debug!("dropping stale stats");
                }
            }
            Err(err) => report(&self.notices, &err, text::LOAD_STATS),
        }

        match self.api.list_visitors().await {
            Ok(list) => {
                if !self.state.update(|s| s.visitors.apply(ticket, list)) {
                    tracing::debug!("dropping stale visitor list");
                }
            }
            Err(err) => report(&self.notices, &err, text::LOAD_VISITORS),
        }
    }

    pub fn open_add(&self, now: NaiveDateTime) {
        self.state.update(|s| {
            s.edits.arm();
            s.visitor_form = Some(VisitorForm::add(now));
        });
    }

    /// Fetch a visitor into the edit modal. The request is registered when
    /// this is called, so a later open or close wins over a slow reply.
    pub fn open_edit(&self, id: u64) -> impl Future<Output = ()> + 'static
    where
        T: Clone + 'static,
        S: Clone + 'static,
        N: Clone + 'static,
    {
        let ticket = self.state.update(|s| s.edits.arm());
        let page = self.clone();
        async move {
            match page.api.get_visitor(id).await {
                Ok(visitor) => page.state.update(|s| {
                    if s.edits.is_current(ticket) {
                        s.visitor_form = Some(VisitorForm::edit(&visitor));
                    }
                }),
                Err(err) => report(&page.notices, &err, text::GET_VISITOR),
            }
        }
    }

    pub fn close_visitor_form(&self) {
        self.state.update(|s| {
            s.edits.arm();
            s.visitor_form = None;
        });
    }

    pub fn close_exit_form(&self) {
        self.state.update(|s| s.exit_form = None);
    }

    /// Submit the add/edit form. On success the modal closes and the page
    /// reloads; on failure the modal stays open.
    pub async fn save(&self, form: VisitorForm) {
        self.state.update(|s| s.busy = true);
        let result = self.api.save_visitor(&form).await;
        self.state.update(|s| s.busy = false);
        match result {
            Ok(message) => {
                notify(&self.notices, NoticeKind::Success, message);
                self.close_visitor_form();
                self.reload().await;
            }
            Err(err) => report(&self.notices, &err, text::SAVE),
        }
    }

    pub async fn record_exit(&self, form: ExitForm) {
        self.state.update(|s| s.busy = true);
        let result = self.api.record_exit(&form).await;
        self.state.update(|s| s.busy = false);
        match result {
            Ok(message) => {
                notify(&self.notices, NoticeKind::Success, message);
                self.close_exit_form();
                self.reload().await;
            }
            Err(err) => report(&self.notices, &err, text::EXIT),
        }
    }

    /// Ask `confirm` with the visitor's name, then delete and reload.
    pub async fn delete(&self, id: u64, confirm: impl FnOnce(&str) -> bool) {
        let name = self.state.with(|s| s.visitors.find(id).map(Visitor::full_name));
        let Some(name) = name else {
            tracing::warn!("delete requested for unknown visitor {id}");
            return;
        };
        if !confirm(&text::delete_visitor_prompt(&name)) {
            return;
        }
        match self.api.delete_visitor(id).await {
            Ok(message) => {
                notify(&self.notices, NoticeKind::Success, message);
                self.reload().await;
            }
            Err(err) => report(&self.notices, &err, text::DELETE),
        }
    }

    /// Build the CSV of every loaded visitor and pass it to `download`.
    pub fn export(&self, today: NaiveDate, download: impl FnOnce(&CsvExport) -> Result<(), String>) {
        let result = self.state.with(|s| export_visitors(s.visitors.records(), today));
        match result {
            Ok(export) => match download(&export) {
                Ok(()) => notify(&self.notices, NoticeKind::Success, text::EXPORT_DONE),
                Err(reason) => {
                    tracing::error!("export download failed: {reason}");
                    notify(&self.notices, NoticeKind::Failure, text::EXPORT_FAILED);
                }
            },
            Err(ExportError::Empty) => {
                notify(&self.notices, NoticeKind::Warning, text::NOTHING_TO_EXPORT)
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                notify(&self.notices, NoticeKind::Failure, text::EXPORT_FAILED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::memory::{Method, ScriptedTransport};
    use crate::state::SharedState;
    use crate::sync::{STATS_PATH, VISITORS_PATH};
    use serde_json::{json, Value};
    use store::VisitorType;

    type Page = VisitorPage<ScriptedTransport, SharedState<VisitorPageState>, SharedState<NoticeSlot>>;

    fn page() -> (Page, ScriptedTransport, SharedState<VisitorPageState>, SharedState<NoticeSlot>) {
        let transport = ScriptedTransport::new();
        let state = SharedState::default();
        let notices = SharedState::default();
        let page = VisitorPage::new(
            DashboardApi::new(transport.clone()),
            state.clone(),
            notices.clone(),
        );
        (page, transport, state, notices)
    }

    fn visitor_json(id: u64, first_name: &str) -> Value {
        json!({
            "id": id,
            "first_name": first_name,
            "last_name": "VELI",
            "visitor_type": "misafir",
            "entry_datetime": "2024-01-01 09:00",
            "exit_datetime": null,
            "creator_name": "ERHAN YAMAN"
        })
    }

    fn stats_reply(total: u64) -> Value {
        json!({"success": true, "data": {"daily": 1, "monthly": 1, "total": total, "active": 1}})
    }

    fn list_reply(visitors: Vec<Value>) -> Value {
        json!({"success": true, "data": visitors})
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn current_notice(notices: &SharedState<NoticeSlot>) -> Option<(NoticeKind, String)> {
        notices.with(|n| n.current().map(|n| (n.kind, n.message.clone())))
    }

    async fn loaded(ids: &[u64]) -> (Page, ScriptedTransport, SharedState<VisitorPageState>, SharedState<NoticeSlot>) {
        let (page, transport, state, notices) = page();
        transport
            .reply(stats_reply(ids.len() as u64))
            .reply(list_reply(ids.iter().map(|id| visitor_json(*id, "ALI")).collect()));
        page.reload().await;
        (page, transport, state, notices)
    }

    #[tokio::test]
    async fn test_save_success_closes_modal_and_reloads() {
        let (page, transport, state, notices) = page();
        transport
            .reply(json!({"success": true, "data": "OK"}))
            .reply(stats_reply(1))
            .reply(list_reply(vec![visitor_json(7, "ALI")]));

        page.open_add(now());
        let mut form = state.snapshot().visitor_form.unwrap();
        form.first_name = "Ali".to_string();
        form.last_name = "Veli".to_string();
        form.visitor_type = VisitorType::Guest;
        page.save(form).await;

        let after = state.snapshot();
        assert_eq!(after.visitor_form, None);
        assert!(!after.busy);
        assert_eq!(after.visitors.len(), 1);
        assert_eq!(after.stats.total, 1);
        assert_eq!(current_notice(&notices), Some((NoticeKind::Success, "OK".to_string())));

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].param("action"), Some("add"));
        assert_eq!(requests[0].param("firstName"), Some("Ali"));
        assert_eq!(requests[1].path, STATS_PATH);
        assert_eq!(requests[2].path, VISITORS_PATH);
        assert_eq!(requests[2].param("action"), Some("list"));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_modal_open() {
        let (page, transport, state, notices) = page();
        transport.reply(json!({"success": false, "data": "Kayıt eklenemedi"}));

        page.open_add(now());
        let mut form = state.snapshot().visitor_form.unwrap();
        form.first_name = "Ali".to_string();
        form.last_name = "Veli".to_string();
        page.save(form.clone()).await;

        assert_eq!(state.snapshot().visitor_form.map(|f| f.mode), Some(form.mode));
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Failure, "Kayıt eklenemedi".to_string()))
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reloads_list() {
        let (page, transport, state, notices) = loaded(&[1, 2]).await;
        transport
            .reply(json!({"success": true, "data": {"id": 1, "message": "Ziyaretçi silindi"}}))
            .reply(stats_reply(1))
            .reply(list_reply(vec![visitor_json(2, "ALI")]));

        let prompted = Cell::new(false);
        page.delete(1, |prompt| {
            prompted.set(true);
            assert!(prompt.contains("ALI VELI"));
            true
        })
        .await;

        assert!(prompted.get());
        let after = state.snapshot();
        assert_eq!(after.visitors.len(), 1);
        assert!(after.visitors.find(1).is_none());
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Success, "Ziyaretçi silindi".to_string()))
        );

        let delete = &transport.requests()[2];
        assert_eq!(delete.param("action"), Some("delete"));
        assert_eq!(delete.param("id"), Some("1"));
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let (page, transport, state, _notices) = loaded(&[1]).await;

        page.delete(1, |_| false).await;

        assert_eq!(transport.requests().len(), 2);
        assert_eq!(state.snapshot().visitors.len(), 1);
    }

    #[tokio::test]
    async fn test_export_of_empty_list_warns() {
        let (page, _transport, _state, notices) = page();

        let downloaded = Cell::new(false);
        page.export(now().date(), |_| {
            downloaded.set(true);
            Ok(())
        });

        assert!(!downloaded.get());
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Warning, text::NOTHING_TO_EXPORT.to_string()))
        );
    }

    #[tokio::test]
    async fn test_export_hands_file_to_download() {
        let (page, _transport, _state, notices) = loaded(&[1, 2]).await;

        let mut filename = None;
        page.export(now().date(), |export| {
            filename = Some(export.filename.clone());
            Ok(())
        });

        assert_eq!(filename.as_deref(), Some("ziyaretci_listesi_2024-01-01.csv"));
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Success, text::EXPORT_DONE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_failed_list_keeps_previous_records() {
        let (page, transport, state, notices) = loaded(&[1, 2]).await;
        transport.reply(stats_reply(5)).fail("connection reset");

        page.reload().await;

        let after = state.snapshot();
        assert_eq!(after.visitors.len(), 2);
        assert_eq!(after.stats.total, 5);
        assert_eq!(
            current_notice(&notices),
            Some((NoticeKind::Failure, text::LOAD_VISITORS.transport.to_string()))
        );
    }

    #[tokio::test]
    async fn test_open_edit_and_exit() {
        let (page, transport, state, _notices) = loaded(&[3]).await;
        transport.reply(json!({"success": true, "data": visitor_json(3, "AYŞE")}));

        page.open_edit(3).await;
        let form = state.snapshot().visitor_form.unwrap();
        assert_eq!(form.id, Some(3));
        assert_eq!(form.first_name, "AYŞE");

        page.open_exit(3, now());
        assert_eq!(state.snapshot().exit_form.map(|f| f.id), Some(3));

        page.open_exit(99, now());
        assert_eq!(state.snapshot().exit_form, None);
    }

    #[tokio::test]
    async fn test_edit_reply_after_close_is_ignored() {
        let (page, transport, state, _notices) = loaded(&[3]).await;
        transport.reply(json!({"success": true, "data": visitor_json(3, "AYŞE")}));

        let pending = page.open_edit(3);
        page.open_add(now());
        pending.await;

        assert_eq!(state.snapshot().visitor_form.map(|f| f.id), Some(None));
    }

    #[test]
    fn test_stale_stats_are_discarded() {
        let mut state = VisitorPageState::default();
        let periodic = state.visitors.begin_reload();
        let manual = state.visitors.begin_reload();

        assert!(state.apply_stats(manual, Stats { total: 9, ..Stats::default() }));
        assert!(!state.apply_stats(periodic, Stats { total: 4, ..Stats::default() }));
        assert_eq!(state.stats.total, 9);
    }
}
