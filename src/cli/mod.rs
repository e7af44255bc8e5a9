//! CLI module for the chemgen binary

pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;
pub use output::OutputFormat;
