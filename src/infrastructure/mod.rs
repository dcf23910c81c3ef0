//! Infrastructure layer: configuration and catalog file ingestion.
//!
//! Everything that touches the environment lives here: reading
//! configuration from environment variables, resolving user-entered file
//! paths, and parsing the delimited catalog file into domain values. The
//! catalog core performs no I/O of its own.

pub mod config;
pub mod csv;
pub mod locate;

pub use config::{AppConfig, ConfigError};
pub use csv::IngestError;
