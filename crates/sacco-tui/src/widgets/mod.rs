//! Custom widget components

pub mod charts;
mod dashboard;
mod form_modal;
mod form_view;
mod header;
mod loan_details;
mod login;
pub mod modal_overlay;
mod notifications;
mod profile;
mod record_table;
mod sidebar;

pub use dashboard::{spinner_frame, DashboardView, EMPTY_LOANS_TEXT};
pub use form_modal::FormModal;
pub use form_view::FormView;
pub use header::Header;
pub use loan_details::LoanDetails;
pub use login::LoginScreen;
pub use notifications::Toasts;
pub use profile::ProfileView;
pub use record_table::RecordTableView;
pub use sidebar::Sidebar;
