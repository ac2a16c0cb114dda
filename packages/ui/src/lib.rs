//! This crate contains all shared UI for the workspace.

pub use dioxus_free_icons::Icon;

pub mod browser;

mod prefs;
pub use prefs::{make_prefs, Prefs};

mod context;
pub use context::{use_api, use_config, Api, DashboardProvider, SignalCell};

pub mod notification;
pub use notification::{notify, report, use_notices, NoticeBanner, NoticeSignal};

mod theme;
pub use theme::{ThemeProvider, ThemeSignal, ThemeToggle};

mod auth;
pub use auth::LogoutButton;

mod navbar;
pub use navbar::Navbar;

pub mod views;
