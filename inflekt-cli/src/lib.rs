//! inflekt CLI library
//!
//! This library provides the command-line interface for the inflekt
//! word inflection engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
