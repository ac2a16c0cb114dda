use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation, FaXmark,
};
use dioxus_free_icons::Icon;

use api::SyncError;
use store::text::FailureText;
use store::{NoticeKind, NoticeSlot};

use crate::browser;
use crate::context::use_config;

const NOTICE_CSS: Asset = asset!("/assets/notice.css");

pub type NoticeSignal = Signal<NoticeSlot>;

pub fn use_notices() -> NoticeSignal {
    use_context::<NoticeSignal>()
}

pub fn notify(notices: &mut NoticeSignal, kind: NoticeKind, message: impl Into<String>) {
    notices.write().show(kind, message);
}

/// Show the notification for a failed operation.
pub fn report(notices: &mut NoticeSignal, err: &SyncError, text: FailureText) {
    let (kind, message) = err.notice(text);
    notify(notices, kind, message);
}

/// The single notification line at the top of a page.
///
/// Each notice is dismissed after the configured lifetime unless a newer one
/// has replaced it by then.
#[component]
pub fn NoticeBanner() -> Element {
    let mut notices = use_notices();
    let lifetime = use_config().notice_lifetime();

    use_effect(move || {
        let Some(id) = notices.read().current().map(|n| n.id) else {
            return;
        };
        spawn(async move {
            browser::sleep(lifetime).await;
            notices.write().dismiss(id);
        });
    });

    let Some(notice) = notices.read().current().cloned() else {
        return rsx! {
            document::Stylesheet { href: NOTICE_CSS }
        };
    };
    let id = notice.id;

    rsx! {
        document::Stylesheet { href: NOTICE_CSS }
        div {
            class: notice.kind.css_class(),
            role: "alert",
            {notice_icon(notice.kind)}
            span { class: "notice-message", "{notice.message}" }
            button {
                class: "notice-close",
                r#type: "button",
                title: "Kapat",
                onclick: move |_| {
                    notices.write().dismiss(id);
                },
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

fn notice_icon(kind: NoticeKind) -> Element {
    match kind {
        NoticeKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        NoticeKind::Failure => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        NoticeKind::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
        NoticeKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
    }
}
