//! Remote table data
//!
//! Fetches pages of rows over HTTP for server-side tables and ships a mock
//! product endpoint for tests and demos.

pub mod error;
pub mod mock;

mod client;
mod config;
mod extract;
mod remote_table;
mod request;

pub use client::*;
pub use config::{AjaxConfig, HttpMethod};
pub use extract::{RemotePage, extract_page, value_at_path};
pub use remote_table::{RemoteTable, ResponseTransform, RowSource, server_params};
pub use request::{RequestToken, RequestTracker};
