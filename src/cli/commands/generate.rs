//! Generate command implementation

use crate::cli::CliError;
use crate::cli::output::{GeneratedCompound, OutputFormat, format_generated};
use crate::generator::CompoundGenerator;
use tracing::debug;

/// Arguments for the `generate` command
pub struct GenerateArgs {
    /// Seed of the first round
    pub seed: u64,
    /// Number of compounds to produce
    pub count: u32,
    /// Rounds tried per compound before giving up
    pub max_attempts: u32,
    pub format: OutputFormat,
}

/// Run rounds on consecutive seeds until each slot has a compound or has
/// used up its attempts
pub fn generate_compounds(
    generator: &CompoundGenerator<'_>,
    args: &GenerateArgs,
) -> Result<Vec<GeneratedCompound>, CliError> {
    if args.max_attempts == 0 {
        return Err(CliError::InvalidArgument(
            "--max-attempts must be at least 1".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(args.count as usize);
    let mut next_seed = args.seed;

    for _ in 0..args.count {
        let mut slot = GeneratedCompound {
            seed: next_seed,
            attempts: 0,
            compound: None,
        };
        while slot.attempts < args.max_attempts {
            slot.seed = next_seed;
            slot.attempts += 1;
            next_seed = next_seed.wrapping_add(1);

            slot.compound = generator.generate(slot.seed)?;
            if slot.compound.is_some() {
                break;
            }
            debug!("Seed {} produced no compound", slot.seed);
        }
        results.push(slot);
    }

    Ok(results)
}

/// Handle the generate command
pub fn handle_generate(generator: &CompoundGenerator<'_>, args: &GenerateArgs) -> Result<(), CliError> {
    let results = generate_compounds(generator, args)?;
    print!("{}", format_generated(&results, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IonicElement;
    use crate::registry::ElementRegistry;

    fn args(count: u32, max_attempts: u32) -> GenerateArgs {
        GenerateArgs {
            seed: 100,
            count,
            max_attempts,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_attempts_are_bounded() {
        // Nothing in this registry can pair, so every round is empty
        let mut registry = ElementRegistry::new();
        registry.add_ionic(IonicElement::new("Oxygen", "O", -2, 3.44));
        let generator = CompoundGenerator::new(&registry);

        let results = generate_compounds(&generator, &args(2, 3)).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.compound.is_none() && r.attempts == 3));
        assert_eq!(results[0].seed, 102);
        assert_eq!(results[1].seed, 105);
    }

    #[test]
    fn test_builtin_registry_fills_slots() {
        let registry = ElementRegistry::builtin().unwrap();
        let generator = CompoundGenerator::new(&registry);

        let results = generate_compounds(&generator, &args(5, 50)).unwrap();
        assert!(results.iter().all(|r| r.compound.is_some()));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let registry = ElementRegistry::new();
        let generator = CompoundGenerator::new(&registry);
        assert!(matches!(
            generate_compounds(&generator, &args(1, 0)),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
