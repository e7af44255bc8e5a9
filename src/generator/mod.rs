//! Random compound generation
//!
//! A round picks a primary element (transition or ionic), looks for ionic
//! elements whose charge cancels one of the primary's charges, and lets the
//! primary build the compound. Every round is reproducible from its seed.
//!
//! A round can legitimately produce nothing: an empty registry, no pairing
//! candidates or charges that cannot be balanced all give `Ok(None)`.
//! Retrying is left to the caller.

use crate::config::{ConfigError, GeneratorConfig};
use crate::models::{Compound, IonicElement, TransitionElement};
use crate::naming::NamingError;
use crate::registry::ElementRegistry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, warn};

/// Error during compound generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// The element a round is built around
#[derive(Debug, Clone, Copy)]
enum Primary<'a> {
    Ionic {
        index: usize,
        element: &'a IonicElement,
    },
    Transition(&'a TransitionElement),
}

impl Primary<'_> {
    fn symbol(&self) -> &str {
        match self {
            Primary::Ionic { element, .. } => element.symbol(),
            Primary::Transition(element) => element.symbol(),
        }
    }

    fn charges(&self) -> Vec<i32> {
        match self {
            Primary::Ionic { element, .. } => vec![element.charge()],
            Primary::Transition(element) => element.charges().to_vec(),
        }
    }

    fn is_same_ionic(&self, candidate: usize) -> bool {
        matches!(self, Primary::Ionic { index, .. } if *index == candidate)
    }
}

/// Generates compounds from a borrowed registry
#[derive(Debug, Clone)]
pub struct CompoundGenerator<'a> {
    registry: &'a ElementRegistry,
    config: GeneratorConfig,
}

impl<'a> CompoundGenerator<'a> {
    /// Create a generator with the default configuration
    pub fn new(registry: &'a ElementRegistry) -> Self {
        Self {
            registry,
            config: GeneratorConfig::default(),
        }
    }

    /// Create a generator with a custom configuration
    pub fn with_config(
        registry: &'a ElementRegistry,
        config: GeneratorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a compound from a seed. The same seed and registry always
    /// give the same result.
    pub fn generate(&self, seed: u64) -> Result<Option<Compound>, GenerationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(&mut rng)
    }

    /// Generate a compound drawing from an existing random source.
    ///
    /// Reusing one source across calls gives an order-dependent sequence.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<Compound>, GenerationError> {
        let roll = rng.gen_range(0..=self.config.roll_max);
        let wants_transition = roll > self.config.transition_threshold;
        debug!("Rolled {} ({} primary)", roll, if wants_transition { "transition" } else { "ionic" });

        let Some(primary) = self.pick_primary(wants_transition, rng) else {
            warn!(
                "No {} elements in registry",
                if wants_transition { "transition" } else { "ionic" }
            );
            return Ok(None);
        };

        if let Primary::Ionic { element, .. } = primary {
            if element.is_neutral() {
                debug!("{} is neutral, returning it alone", element.symbol());
                return Ok(Some(Compound::new(element.name(), [(element.symbol(), 1)])));
            }
        }

        let candidates = self.pairing_candidates(&primary);
        debug!(
            "{} has {} pairing candidate(s)",
            primary.symbol(),
            candidates.len()
        );

        let paired = match candidates.as_slice() {
            [] => return Ok(None),
            [only] => *only,
            _ => candidates[rng.gen_range(0..candidates.len())],
        };
        let paired_count = rng.gen_range(self.config.pair_count_min..=self.config.pair_count_max);
        debug!("Pairing {} with {} x {}", primary.symbol(), paired_count, paired.symbol());

        let compound = match primary {
            Primary::Ionic { element, .. } => element.covalent_bond(paired, paired_count)?,
            Primary::Transition(element) => element.bond(paired, paired_count)?,
        };
        Ok(compound)
    }

    fn pick_primary<R: Rng + ?Sized>(&self, wants_transition: bool, rng: &mut R) -> Option<Primary<'a>> {
        let registry: &'a ElementRegistry = self.registry;
        if wants_transition {
            let elements = registry.transition();
            if elements.is_empty() {
                return None;
            }
            Some(Primary::Transition(&elements[rng.gen_range(0..elements.len())]))
        } else {
            let elements = registry.ionic();
            if elements.is_empty() {
                return None;
            }
            let index = rng.gen_range(0..elements.len());
            Some(Primary::Ionic {
                index,
                element: &elements[index],
            })
        }
    }

    /// Ionic elements, other than the primary itself, whose charge is the
    /// negation of one of the primary's charges
    fn pairing_candidates(&self, primary: &Primary<'_>) -> Vec<&'a IonicElement> {
        let registry: &'a ElementRegistry = self.registry;
        let charges = primary.charges();
        registry
            .ionic()
            .iter()
            .enumerate()
            .filter(|(index, _)| !primary.is_same_ionic(*index))
            .filter(|(_, possible)| {
                charges
                    .iter()
                    .any(|&charge| i64::from(possible.charge()) + i64::from(charge) == 0)
            })
            .map(|(_, possible)| possible)
            .collect()
    }
}

/// Generate a compound from `registry` with the default configuration
pub fn generate_random_compound(
    registry: &ElementRegistry,
    seed: u64,
) -> Result<Option<Compound>, GenerationError> {
    CompoundGenerator::new(registry).generate(seed)
}
