//! Elements command implementation

use crate::cli::CliError;
use crate::cli::output::{OutputFormat, format_elements};
use crate::registry::ElementRegistry;

/// Handle the `elements` command
pub fn handle_elements(registry: &ElementRegistry, format: OutputFormat) -> Result<(), CliError> {
    print!("{}", format_elements(registry, format)?);
    Ok(())
}
