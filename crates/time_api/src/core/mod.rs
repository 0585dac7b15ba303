//! # Time Service Core
//!
//! Timezone-aware time operations backing the HTTP routes.
//!
//! ## Features
//! - Current time queries for any IANA timezone
//! - Silent fallback to UTC for unresolvable identifiers
//! - Automatic DST handling via the compiled-in tz database
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `models`: Serializable response payloads
//! - `provider`: Timezone resolution and snapshot construction
//! - `utils`: Format constants and epoch helpers

pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
