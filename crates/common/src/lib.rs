//! Shared utilities, configuration, and error handling for Recipebox
//!
//! This crate provides common functionality used across the Recipebox services:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request body extraction with validation
//! - Password hashing and constant-time comparison

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{constant_time_eq, hash_password, verify_password};
pub use db::{is_foreign_key_violation, is_unique_violation, RepositoryError};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
