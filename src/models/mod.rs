//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Account record model
pub mod account;
