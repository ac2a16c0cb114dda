//! Route targets. The pages themselves live in the `ui` crate.

use dioxus::prelude::*;
use ui::views::{DashboardView, UsersView};
use ui::Navbar;

use crate::Route;

/// Navbar above every page.
#[component]
pub fn PageLayout() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, active_class: "active", "Ziyaretçiler" }
            Link { to: Route::UserManagement {}, active_class: "active", "Kullanıcılar" }
        }
        Outlet::<Route> {}
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn UserManagement() -> Element {
    rsx! { UsersView {} }
}
