//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionProvider`] context, `login` / `logout` and the context hooks |
//! | [`listing`] | [`ListingController`] state machine and the [`use_listing`] hook |
//! | [`views`] | dashboard shell, login form, users and receipts listings |
//! | [`messages`] | error → Spanish UI text |
//! | [`format`] | date formatting for tables |

pub mod format;
pub mod listing;
pub use listing::{use_listing, Listing, ListingController, ListingPhase};

pub mod messages;
pub use messages::describe_error;

pub mod session;
pub use session::{use_api, use_config, use_session, SessionProvider};

mod sidebar;
pub use sidebar::{Section, Sidebar};

mod storage;
pub use storage::session_store;

pub mod views;
pub use views::{DashboardShell, LoginView, ReceiptsView, UsersView};
