//! Error type for CLI commands

use crate::config::ConfigError;
use crate::generator::GenerationError;
use crate::naming::NamingError;
use crate::registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while running a CLI command
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Dataset could not be loaded
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generation failed with a hard error
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Naming lookup failed
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// JSON output error
    #[error("Failed to write JSON output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            CliError::Registry(err) => err.user_message(),
            CliError::Config(ConfigError::Invalid(msg)) => {
                format!("Invalid configuration: {msg}\n\nHint: Check the [generator] table of your config file.")
            }
            CliError::Generation(GenerationError::Naming(NamingError::NumeralOutOfRange(charge)))
            | CliError::Naming(NamingError::NumeralOutOfRange(charge)) => format!(
                "Oxidation state {charge} has no roman numeral (supported: 1 to 10).\n\n\
                Hint: Check the transition charges in your dataset."
            ),
            _ => self.to_string(),
        }
    }
}
