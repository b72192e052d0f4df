//! Utility modules for cert-sculpt
//!
//! This module contains error types and console status helpers.

pub mod error;
pub mod progress;

pub use error::{BundleError, ConfigError, MissingBlock, OutputError};
