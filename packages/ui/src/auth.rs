use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use store::text;

use crate::browser;
use crate::context::use_api;
use crate::notification::{report, use_notices};

/// Confirms, ends the session and follows the server's redirect.
#[component]
pub fn LogoutButton() -> Element {
    let api = use_api();
    let mut notices = use_notices();

    rsx! {
        button {
            class: "logout-button",
            r#type: "button",
            onclick: move |_| {
                if !browser::confirm(text::LOGOUT_CONFIRM) {
                    return;
                }
                let api = api.clone();
                spawn(async move {
                    match api.logout().await {
                        Ok(redirect) => browser::navigate(&redirect),
                        Err(err) => report(&mut notices, &err, text::LOGOUT),
                    }
                });
            },
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "Çıkış" }
        }
    }
}
