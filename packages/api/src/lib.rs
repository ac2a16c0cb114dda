//! # API crate: backend access for the visitor desk dashboard
//!
//! The dashboard talks to a small JSON backend that owns all records. This
//! crate wraps every call the pages make and turns the backend's
//! `{success, data}` envelope into an explicit [`Result`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] trait and its `reqwest` implementation, [`HttpTransport`] |
//! | [`memory`] | [`ScriptedTransport`], an in-memory transport that records requests (tests, demos) |
//! | [`envelope`] | Decoding of the response envelope and of write confirmations |
//! | [`error`] | [`SyncError`] and its mapping to user-facing notifications |
//! | [`sync`] | [`DashboardApi`], one method per backend operation |
//! | [`state`] | [`StateCell`], where a page keeps its state, and [`SharedState`] |
//! | [`visitor_page`] | [`VisitorPage`]: reload, save, exit, delete and export on the dashboard |
//! | [`user_page`] | [`UserPage`]: reload, save and delete on user management |
//!
//! ## Endpoints
//!
//! - **Visitors**: `GET /api/visitors?action=list|get`, `POST /api/visitors` with
//!   `action=add|update|exit|delete`
//! - **Users**: `GET /api/users?action=list|get`, `POST /api/users` with
//!   `action=add|update|delete`
//! - **Stats**: `GET /api/stats`
//! - **Session**: `GET /logout`

pub mod envelope;
pub mod error;
pub mod memory;
pub mod state;
pub mod sync;
pub mod transport;
pub mod user_page;
pub mod visitor_page;

pub use error::SyncError;
pub use memory::{RecordedRequest, ScriptedTransport};
pub use state::{SharedState, StateCell};
pub use sync::DashboardApi;
pub use transport::{HttpTransport, Transport};
pub use user_page::{UserPage, UserPageState};
pub use visitor_page::{VisitorPage, VisitorPageState};
