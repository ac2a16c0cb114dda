use dioxus::prelude::*;

use store::DashboardConfig;
use ui::DashboardProvider;
use views::{Dashboard, PageLayout, UserManagement};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageLayout)]
        #[route("/")]
        Root {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/user_management")]
        UserManagement {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Bundled defaults; edit before building to point at another backend.
const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> DashboardConfig {
    DashboardConfig::from_toml(DASHBOARD_TOML).unwrap_or_else(|e| {
        tracing::warn!("invalid {}, using defaults: {e}", DashboardConfig::filename());
        DashboardConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DashboardProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/dashboard`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
