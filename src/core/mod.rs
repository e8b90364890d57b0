//! Core types, errors, and configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::TrackerConfig;
pub use error::{MusterError, Result};
pub use types::{fresh_id, GroupId, Points};
