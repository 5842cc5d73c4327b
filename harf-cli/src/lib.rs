//! harf CLI library
//!
//! This library provides the command-line interface for the harf
//! Arabic text normalizer.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
