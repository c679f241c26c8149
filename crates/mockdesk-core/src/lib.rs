//! # mockdesk-core
//!
//! Core types, traits, configuration, query engine and error handling for mockdesk.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod traits;

pub use config::shellexpand;
