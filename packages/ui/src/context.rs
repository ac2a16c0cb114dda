use dioxus::prelude::*;

use api::{DashboardApi, HttpTransport, StateCell};
use store::{DashboardConfig, NoticeSlot};

use crate::browser;
use crate::theme::ThemeProvider;

pub type Api = DashboardApi<HttpTransport>;

pub fn use_api() -> Api {
    use_context::<Api>()
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}

/// A signal handed to the page controllers as their state. Writes go
/// through the signal, so every reader re-renders.
pub struct SignalCell<S: 'static>(pub Signal<S>);

impl<S: 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SignalCell<S> {}

impl<S: 'static> StateCell<S> for SignalCell<S> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.0.read();
        f(&state)
    }

    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// Provides the configuration, the backend client, the notification slot
/// and the theme to everything below it.
#[component]
pub fn DashboardProvider(config: DashboardConfig, children: Element) -> Element {
    use_context_provider(|| {
        let base = config.api_base(browser::origin().as_deref());
        tracing::info!("backend at {base:?}");
        DashboardApi::new(HttpTransport::new(base))
    });
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(NoticeSlot::default()));

    rsx! {
        ThemeProvider { {children} }
    }
}
