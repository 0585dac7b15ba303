//! # Time Service API
//!
//! An HTTP server exposing current time information for any IANA timezone.
//!
//! ## Modules
//! - `cli`: Command line interface and configuration parsing
//! - `config`: Runtime configuration
//! - `core`: Timezone resolution and time snapshot construction
//! - `server`: Axum router, request handlers, and the serve loop

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
