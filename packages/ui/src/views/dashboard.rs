use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFileExport, FaMagnifyingGlass, FaPlus};
use dioxus_free_icons::Icon;

use api::{HttpTransport, VisitorPage, VisitorPageState};
use store::table::visitor_table;
use store::{filter_visitors, Debouncer, ExitForm, NoticeSlot, VisitorForm};

use super::{ExitModal, StatsCards, VisitorModal, VisitorTable};
use crate::browser;
use crate::context::{use_api, use_config, SignalCell};
use crate::notification::{use_notices, NoticeBanner};

const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

type DashboardPage =
    VisitorPage<HttpTransport, SignalCell<VisitorPageState>, SignalCell<NoticeSlot>>;

/// Visitor dashboard: stats, search, the visitor table and its modals.
#[component]
pub fn DashboardView() -> Element {
    let api = use_api();
    let config = use_config();
    let notices = use_notices();

    let state = use_signal(VisitorPageState::default);
    let mut search = use_signal(String::new);
    let mut query = use_signal(String::new);
    let mut debouncer = use_signal(Debouncer::default);

    let page: DashboardPage = VisitorPage::new(api, SignalCell(state), SignalCell(notices));

    // Initial load, then refresh on the configured interval.
    let interval = config.refresh_interval();
    let refresher = page.clone();
    use_hook(move || {
        spawn(async move {
            loop {
                refresher.reload().await;
                match interval {
                    Some(interval) => browser::sleep(interval).await,
                    None => break,
                }
            }
        });
    });

    let debounce = config.search_debounce();
    let (view, stats, busy, visitor_form, exit_form) = {
        let current = state.read();
        let shown = filter_visitors(current.visitors.records(), &query.read());
        (
            visitor_table(&shown),
            current.stats,
            current.busy,
            current.visitor_form.clone(),
            current.exit_form.clone(),
        )
    };

    // A new key per record remounts the modal, so its fields are seeded
    // from the form being opened rather than the previous one.
    let visitor_key = match visitor_form.as_ref().and_then(|f| f.id) {
        Some(id) => format!("visitor-{id}"),
        None => "visitor-new".to_string(),
    };
    let exit_key = exit_form.as_ref().map_or(0, |f| f.id);

    let export_page = page.clone();
    let add_page = page.clone();
    let edit_page = page.clone();
    let exit_page = page.clone();
    let delete_page = page.clone();
    let save_page = page.clone();
    let close_page = page.clone();
    let record_page = page.clone();
    let dismiss_page = page.clone();

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }
        div {
            class: "page",
            NoticeBanner {}
            StatsCards { stats }
            div {
                class: "toolbar",
                div {
                    class: "search-box",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    input {
                        id: "searchInput",
                        r#type: "search",
                        placeholder: "Ziyaretçi ara...",
                        value: "{search}",
                        oninput: move |evt: FormEvent| {
                            let value = evt.value();
                            search.set(value.clone());
                            let ticket = debouncer.write().arm();
                            spawn(async move {
                                browser::sleep(debounce).await;
                                if debouncer.read().is_current(ticket) {
                                    query.set(value);
                                }
                            });
                        },
                    }
                }
                div {
                    class: "toolbar-actions",
                    button {
                        class: "button button--secondary",
                        r#type: "button",
                        onclick: move |_| export_page.export(browser::today(), browser::download),
                        Icon { icon: FaFileExport, width: 14, height: 14 }
                        span { "Excel'e Aktar" }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| add_page.open_add(browser::now()),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Ziyaretçi Ekle" }
                    }
                }
            }
            VisitorTable {
                view,
                on_edit: move |id: u64| {
                    spawn(edit_page.open_edit(id));
                },
                on_exit: move |id: u64| exit_page.open_exit(id, browser::now()),
                on_delete: move |id: u64| {
                    let page = delete_page.clone();
                    spawn(async move { page.delete(id, browser::confirm).await });
                },
            }
        }

        if let Some(form) = visitor_form {
            VisitorModal {
                key: "{visitor_key}",
                form,
                busy,
                on_submit: move |form: VisitorForm| {
                    let page = save_page.clone();
                    spawn(async move { page.save(form).await });
                },
                on_close: move |_| close_page.close_visitor_form(),
            }
        }

        if let Some(form) = exit_form {
            ExitModal {
                key: "exit-{exit_key}",
                form,
                busy,
                on_submit: move |form: ExitForm| {
                    let page = record_page.clone();
                    spawn(async move { page.record_exit(form).await });
                },
                on_close: move |_| dismiss_page.close_exit_form(),
            }
        }
    }
}
