use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUserPlus;
use dioxus_free_icons::Icon;

use api::{HttpTransport, UserPage, UserPageState};
use store::table::user_table;
use store::{NoticeSlot, UserForm};

use super::{UserModal, UserTable};
use crate::browser;
use crate::context::{use_api, SignalCell};
use crate::notification::{use_notices, NoticeBanner};

const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

type UsersPage = UserPage<HttpTransport, SignalCell<UserPageState>, SignalCell<NoticeSlot>>;

/// User management: the user table and the add/edit modal.
///
/// Loaded once on mount and after every successful write; there is no
/// periodic refresh on this page.
#[component]
pub fn UsersView() -> Element {
    let api = use_api();
    let notices = use_notices();

    let state = use_signal(UserPageState::default);
    let page: UsersPage = UserPage::new(api, SignalCell(state), SignalCell(notices));

    let loader = page.clone();
    use_hook(move || {
        spawn(async move { loader.reload().await });
    });

    let (view, busy, user_form) = {
        let current = state.read();
        (
            user_table(current.users.records()),
            current.busy,
            current.user_form.clone(),
        )
    };
    let user_key = match user_form.as_ref().and_then(|f| f.id) {
        Some(id) => format!("user-{id}"),
        None => "user-new".to_string(),
    };

    let add_page = page.clone();
    let edit_page = page.clone();
    let delete_page = page.clone();
    let save_page = page.clone();
    let close_page = page.clone();

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }
        div {
            class: "page",
            NoticeBanner {}
            div {
                class: "toolbar",
                h1 { class: "page-title", "Kullanıcı Yönetimi" }
                div {
                    class: "toolbar-actions",
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| add_page.open_add(),
                        Icon { icon: FaUserPlus, width: 14, height: 14 }
                        span { "Kullanıcı Ekle" }
                    }
                }
            }
            UserTable {
                view,
                on_edit: move |id: u64| {
                    spawn(edit_page.open_edit(id));
                },
                on_delete: move |id: u64| {
                    let page = delete_page.clone();
                    spawn(async move { page.delete(id, browser::confirm).await });
                },
            }
        }

        if let Some(form) = user_form {
            UserModal {
                key: "{user_key}",
                form,
                busy,
                on_submit: move |form: UserForm| {
                    let page = save_page.clone();
                    spawn(async move { page.save(form).await });
                },
                on_close: move |_| close_page.close_form(),
            }
        }
    }
}
