//! Dataset parsers
//!
//! The flat format groups rows under `Element-Type:` headers:
//!
//! ```text
//! Element-Type:Ionic
//! Oxygen|O|-2|3.44
//! Lithium|Li|1|0.98|true
//! Element-Type:Transition
//! Iron|Fe|2,3
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use super::{ElementRegistry, RegistryError};
use crate::models::{ChemicalElement, IonicElement, TransitionElement};
use std::str::FromStr;

/// Dataset bundled with the crate
pub const BUILTIN_DATASET: &str = include_str!("../../data/periodic_table.txt");

const SECTION_HEADER: &str = "Element-Type:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Ionic,
    Transition,
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ionic" => Ok(Section::Ionic),
            "transition" => Ok(Section::Transition),
            other => Err(other.to_string()),
        }
    }
}

/// Parse a dataset in the flat `Element-Type:` format
pub fn parse_flat(content: &str) -> Result<ElementRegistry, RegistryError> {
    let mut registry = ElementRegistry::new();
    let mut section = None;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let row = raw.trim();
        if row.is_empty() || row.starts_with('#') {
            continue;
        }

        if let Some(kind) = row.strip_prefix(SECTION_HEADER) {
            let parsed = kind
                .parse::<Section>()
                .map_err(|section| RegistryError::UnknownSection { line, section })?;
            section = Some(parsed);
            continue;
        }

        let fields: Vec<&str> = row.split('|').map(str::trim).collect();
        match section {
            None => return Err(RegistryError::MissingSection { line }),
            Some(Section::Ionic) => registry.add_ionic(parse_ionic(line, &fields)?),
            Some(Section::Transition) => registry.add_transition(parse_transition(line, &fields)?),
        }
    }

    Ok(registry)
}

/// Parse a YAML (or JSON) list of elements tagged with `type: ionic | transition`
pub fn parse_structured(content: &str) -> Result<ElementRegistry, RegistryError> {
    let elements: Vec<ChemicalElement> = serde_yaml::from_str(content)?;
    for (index, element) in elements.iter().enumerate() {
        if element.name().is_empty() || element.symbol().is_empty() {
            return Err(RegistryError::InvalidEntry {
                entry: index + 1,
                reason: "name and symbol must not be empty".to_string(),
            });
        }
    }
    Ok(elements.into_iter().collect())
}

fn identity<'a>(line: usize, fields: &[&'a str], expected: usize) -> Result<(&'a str, &'a str), RegistryError> {
    if fields.len() < expected {
        return Err(RegistryError::Parse {
            line,
            reason: format!("expected at least {expected} fields, found {}", fields.len()),
        });
    }
    let (name, symbol) = (fields[0], fields[1]);
    if name.is_empty() || symbol.is_empty() {
        return Err(RegistryError::InvalidElement {
            line,
            reason: "name and symbol must not be empty".to_string(),
        });
    }
    Ok((name, symbol))
}

fn parse_field<T: FromStr>(line: usize, field: &str, what: &str) -> Result<T, RegistryError> {
    field.parse().map_err(|_| RegistryError::Parse {
        line,
        reason: format!("invalid {what} '{field}'"),
    })
}

fn parse_ionic(line: usize, fields: &[&str]) -> Result<IonicElement, RegistryError> {
    let (name, symbol) = identity(line, fields, 4)?;
    let charge = parse_field(line, fields[2], "charge")?;
    let electronegativity = parse_field(line, fields[3], "electronegativity")?;
    let metal = match fields.get(4) {
        Some(flag) => parse_field::<bool>(line, &flag.to_lowercase(), "metal flag")?,
        None => false,
    };
    Ok(IonicElement::new(name, symbol, charge, electronegativity).metal(metal))
}

fn parse_transition(line: usize, fields: &[&str]) -> Result<TransitionElement, RegistryError> {
    let (name, symbol) = identity(line, fields, 3)?;
    let charges = fields[2]
        .split(',')
        .map(str::trim)
        .filter(|charge| !charge.is_empty())
        .map(|charge| parse_field(line, charge, "charge"))
        .collect::<Result<Vec<i32>, _>>()?;
    if charges.is_empty() {
        return Err(RegistryError::InvalidElement {
            line,
            reason: format!("transition element {symbol} has no charges"),
        });
    }
    Ok(TransitionElement::new(name, symbol, charges))
}
