//! # titlecheck Store
//!
//! Persistent set of registered publication titles. Titles are unique,
//! never mutated and never deleted; inserting a duplicate is a normal
//! outcome reported as `false`.
pub mod error;
pub mod sqlite;

pub use error::{Result, StoreError};
pub use sqlite::{DEFAULT_DB_PATH, ImportReport, SqliteTitleStore};
