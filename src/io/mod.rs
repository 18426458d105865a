//! Input/output: command line, constants, errors and PNG export

/// Command-line interface and run orchestration
pub mod cli;
/// Build-time generation constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG encoding and file output
pub mod image;
