pub mod config;
pub mod debounce;
pub mod export;
pub mod filter;
pub mod form;
pub mod models;
pub mod notice;
pub mod records;
pub mod table;
pub mod text;
pub mod theme;

mod prefs;
pub use prefs::{MemoryPrefs, PreferenceStore};

mod file_prefs;
pub use file_prefs::FilePrefs;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStoragePrefs;

pub use config::DashboardConfig;
pub use debounce::{DebounceTicket, Debouncer};
pub use export::{export_visitors, CsvExport, ExportError};
pub use filter::filter_visitors;
pub use form::{ExitForm, FormError, FormFields, FormMode, UserForm, VisitorForm};
pub use models::{Record, Stats, User, Visitor, VisitorType, PRIMARY_ADMIN_ID};
pub use notice::{Notice, NoticeKind, NoticeSlot};
pub use records::{RecordStore, ReloadTicket};
pub use table::{DateCell, ExitCell, Role, TableView, UserRow, VisitorRow};
pub use theme::{Theme, ThemeController};
