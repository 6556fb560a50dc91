//! Error types

mod config;
mod storage;

pub use config::*;
pub use storage::*;
