//! # Dashboard configuration: `dashboard.toml`
//!
//! Client-side settings for the admin dashboard. The web binary embeds a
//! `dashboard.toml` next to its manifest and parses it at start-up; a missing
//! or invalid file falls back to [`DashboardConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""            # empty = same origin as the page
//!
//! [refresh]
//! interval_secs = 30       # 0 disables periodic reloads
//!
//! [search]
//! debounce_ms = 300
//!
//! [notice]
//! dismiss_secs = 5
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and duration helpers. |
//! | [`ApiConfig`] | Where the backend lives. |
//! | [`RefreshConfig`] | Periodic reload interval, default **30 seconds**. |
//! | [`SearchConfig`] | Search box debounce, default **300 ms**. |
//! | [`NoticeConfig`] | Notification lifetime, default **5 seconds**. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub notice: NoticeConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the backend, e.g. `"https://desk.example.com"`.
    /// Empty string means the page's own origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_refresh_interval")]
    pub interval_secs: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_dismiss_secs")]
    pub dismiss_secs: u32,
}

fn default_refresh_interval() -> u32 {
    30
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_dismiss_secs() -> u32 {
    5
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_refresh_interval(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            dismiss_secs: default_dismiss_secs(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// `None` when periodic reloads are disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh.interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn notice_lifetime(&self) -> Duration {
        Duration::from_secs(u64::from(self.notice.dismiss_secs))
    }

    /// Resolve the API base against the page origin.
    pub fn api_base(&self, page_origin: Option<&str>) -> String {
        let configured = self.api.base_url.trim().trim_end_matches('/');
        if configured.is_empty() {
            return page_origin.unwrap_or_default().trim_end_matches('/').to_string();
        }
        configured.to_string()
    }
}
