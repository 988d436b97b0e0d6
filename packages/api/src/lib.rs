//! # API crate: typed client for the HR REST API
//!
//! Everything the dashboard needs to talk to the server: the HTTP client, the
//! wire models, the query builders with their label/key translation tables, and
//! the error taxonomy.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] (`login`, `list_users`, `list_receipts`, `get_receipt_file`) and the [`PageSource`] seam |
//! | [`config`] | [`ApiConfig`]: base URL and timeout from the environment or `dashboard.toml` |
//! | [`error`] | [`ApiError`]: `Auth`, `Transport`, `Status`, `Decode`, `InvalidUrl`, `MissingToken` |
//! | [`filters`] | Users filter dimensions and sort keys, receipts flags and sort orders |
//! | [`models`] | [`User`], [`Receipt`], [`PageResult`], login and file-link payloads |
//! | [`query`] | [`UserQuery`], [`ReceiptQuery`], [`PageCursor`] and the [`ListingQuery`] trait |
//!
//! ## Endpoints
//!
//! - `POST users/demo_login/`: credentials → token + user
//! - `GET users/`: employees, filtered/sorted/searched
//! - `GET receipts/`: receipts of a year, filtered by status flags
//! - `GET receipts/{id}/file`: link to a receipt's document

pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod query;

pub use client::{ApiClient, PageSource};
pub use config::ApiConfig;
pub use error::ApiError;
pub use filters::{FilterOption, ReceiptFlag, ReceiptSort, UserFilter, UserSort, ALL_LABEL};
pub use models::{LoginResponse, PageResult, Receipt, ReceiptFile, User};
pub use query::{ListingQuery, PageCursor, ReceiptQuery, UserQuery};
