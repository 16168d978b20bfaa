//! Filesystem helpers for the configuration template manager
//!
//! Provides format-agnostic loading and saving of structured files and
//! atomic, locked writes for materialized configuration.

pub mod config;
pub mod error;
pub mod io;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
