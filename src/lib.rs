//! Chemical Name Generator - procedural compound names and formulas
//!
//! Provides:
//! - Element models and a registry loaded from a small periodic-table dataset
//! - Naming rules (multiplicity prefixes, `-ide` endings, oxidation-state numerals)
//! - Charge balancing for ionic and transition-metal bonds
//! - A seeded generator producing reproducible compounds like "Dilithium Monoxide"

pub mod bonding;
pub mod config;
pub mod generator;
pub mod models;
pub mod naming;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types
pub use bonding::atoms_required_to_balance;
pub use config::{AppConfig, ConfigError, GeneratorConfig};
pub use generator::{CompoundGenerator, GenerationError, generate_random_compound};
pub use models::{ChemicalElement, Compound, FormulaTerm, IonicElement, TransitionElement};
pub use naming::{NamingError, element_name_to_ion, multiplicity_prefix, roman_numeral, superscript};
pub use registry::{ElementRegistry, RegistryError};
