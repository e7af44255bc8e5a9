//! Output formatting for CLI

use crate::models::Compound;
use crate::registry::ElementRegistry;
use serde::Serialize;

use super::CliError;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of one generated slot
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCompound {
    /// Seed of the last round tried for this slot
    pub seed: u64,
    /// Number of rounds tried
    pub attempts: u32,
    pub compound: Option<Compound>,
}

/// Format generated compounds
pub fn format_generated(results: &[GeneratedCompound], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Text => {
            let mut output = String::new();
            for result in results {
                match &result.compound {
                    Some(compound) => output.push_str(&format!(
                        "{:>20}  {}  {}\n",
                        result.seed,
                        compound.name(),
                        compound.formula()
                    )),
                    None => output.push_str(&format!(
                        "{:>20}  no compound after {} attempt(s)\n",
                        result.seed, result.attempts
                    )),
                }
            }
            Ok(output)
        }
    }
}

#[derive(Serialize)]
struct ElementListing<'a> {
    ionic: &'a [crate::models::IonicElement],
    transition: &'a [crate::models::TransitionElement],
}

/// Format the contents of a registry
pub fn format_elements(registry: &ElementRegistry, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ElementListing {
            ionic: registry.ionic(),
            transition: registry.transition(),
        })?),
        OutputFormat::Text => {
            let mut output = format!("Ionic elements ({}):\n", registry.ionic().len());
            for element in registry.ionic() {
                output.push_str(&format!(
                    "  {:<3} {:<14} charge {:+}  electronegativity {:.2}{}\n",
                    element.symbol(),
                    element.name(),
                    element.charge(),
                    element.electronegativity(),
                    if element.is_metal() { "  metal" } else { "" }
                ));
            }
            output.push_str(&format!(
                "\nTransition elements ({}):\n",
                registry.transition().len()
            ));
            for element in registry.transition() {
                let charges: Vec<String> = element.charges().iter().map(|c| format!("{c:+}")).collect();
                output.push_str(&format!(
                    "  {:<3} {:<14} charges {}\n",
                    element.symbol(),
                    element.name(),
                    charges.join(", ")
                ));
            }
            Ok(output)
        }
    }
}
