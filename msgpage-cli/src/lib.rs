//! msgpage CLI library
//!
//! This library provides the command-line interface for splitting messages
//! into numbered, size-limited parts and joining them back together.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::CliError;
