mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod stats_cards;
pub use stats_cards::StatsCards;

mod visitor_table;
pub use visitor_table::{DateCellView, VisitorTable};

mod visitor_modal;
pub use visitor_modal::VisitorModal;

mod exit_modal;
pub use exit_modal::ExitModal;

mod dashboard;
pub use dashboard::DashboardView;

mod user_table;
pub use user_table::UserTable;

mod user_modal;
pub use user_modal::UserModal;

mod users;
pub use users::UsersView;
