use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::theme::ThemeToggle;

const NAVBAR_CSS: Asset = asset!("/assets/navbar.css");

/// Top bar. `children` are the page links.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Ziyaretçi Takip" }
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-actions",
                ThemeToggle {}
                LogoutButton {}
            }
        }
    }
}
