use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

use store::{Theme, ThemeController};

use crate::browser;
use crate::prefs::{make_prefs, Prefs};

pub type ThemeSignal = Signal<ThemeController<Prefs>>;

/// Loads the saved theme and keeps `data-theme` on the document in sync.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme: ThemeSignal =
        use_context_provider(|| Signal::new(ThemeController::load(make_prefs())));

    use_effect(move || browser::apply_theme(theme.read().current()));

    rsx! {
        {children}
    }
}

/// Shows a sun while dark (click for light) and a moon while light.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let current = theme.read().current();

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: match current {
                Theme::Dark => "Açık tema",
                Theme::Light => "Koyu tema",
            },
            onclick: move |_| {
                let next = theme.write().toggle();
                tracing::debug!("theme toggled to {}", next.as_str());
            },
            {match current {
                Theme::Dark => rsx! { Icon { icon: FaSun, width: 16, height: 16 } },
                Theme::Light => rsx! { Icon { icon: FaMoon, width: 16, height: 16 } },
            }}
        }
    }
}
