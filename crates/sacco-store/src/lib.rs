//! # sacco-store - Record Store and Upload Collaborators
//!
//! Asynchronous backends the portal talks to. Everything here sits behind a
//! `trait_variant` trait so the app layer can run queries on spawned tasks
//! and tests can substitute their own implementations.
//!
//! ## Public API
//!
//! - [`RecordStore`] / [`LocalRecordStore`] - Loan, application and trend queries
//! - [`FixtureStore`] - Built-in or file-backed fixture data with optional latency
//! - [`fetch_dashboard()`] - Concurrent load of every dashboard collection
//! - [`ImageUploader`] / [`SimulatedUploader`] - Profile picture upload

pub mod fixtures;
pub mod store;
pub mod upload;

pub use fixtures::{FixtureSet, FixtureStore};
pub use store::{
    fetch_dashboard, ActiveLoansResponse, ApplicationsResponse, DashboardSnapshot,
    LocalRecordStore, RecordStore,
};
pub use upload::{
    upload_file_name, ImageUploader, LocalImageUploader, SimulatedUploader, UploadReceipt,
};
