//! Compound model

use crate::naming::superscript;
use serde::Serialize;
use std::fmt;

/// One `symbol^count` term of a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormulaTerm {
    pub symbol: String,
    pub count: u32,
}

/// A named compound and its formula.
///
/// Elements are referenced by symbol only, so a compound stays valid after
/// the registry it was generated from is dropped.
///
/// Only [`Compound::new`] builds one, so `formula` always matches
/// `composition`. Compounds serialize for output but are never read back:
///
/// ```compile_fail
/// use chemical_name_generator::Compound;
///
/// let _: Compound = serde_json::from_str(r#"{"name":"X","formula":"Na^9","composition":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compound {
    name: String,
    formula: String,
    composition: Vec<FormulaTerm>,
}

impl Compound {
    /// Create a compound from its name and `(symbol, count)` pairs.
    ///
    /// Terms keep their insertion order in the formula. A repeated symbol is
    /// folded into its first occurrence.
    pub fn new<I, S>(name: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut composition: Vec<FormulaTerm> = Vec::new();
        for (symbol, count) in terms {
            let symbol = symbol.into();
            match composition.iter_mut().find(|term| term.symbol == symbol) {
                Some(term) => term.count += count,
                None => composition.push(FormulaTerm { symbol, count }),
            }
        }

        let formula = composition
            .iter()
            .map(|term| format!("{}{}", term.symbol, superscript(term.count)))
            .collect();

        Self {
            name: name.into(),
            formula,
            composition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn composition(&self) -> &[FormulaTerm] {
        &self.composition
    }

    /// Atom count for a symbol, if the compound contains it
    pub fn count_of(&self, symbol: &str) -> Option<u32> {
        self.composition
            .iter()
            .find(|term| term.symbol == symbol)
            .map(|term| term.count)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_keeps_insertion_order() {
        let compound = Compound::new("Dilithium Oxide", [("Li", 2), ("O", 1)]);
        assert_eq!(compound.formula(), "Li^2O^1");

        let reversed = Compound::new("Oxide Dilithium", [("O", 1), ("Li", 2)]);
        assert_eq!(reversed.formula(), "O^1Li^2");
    }

    #[test]
    fn test_single_element_compound() {
        let compound = Compound::new("Neon", [("Ne", 1)]);
        assert_eq!(compound.formula(), "Ne^1");
        assert_eq!(compound.composition().len(), 1);
        assert_eq!(compound.to_string(), "Neon (Ne^1)");
    }

    #[test]
    fn test_repeated_symbol_is_folded() {
        let compound = Compound::new("Dichlorine", [("Cl", 1), ("Cl", 1)]);
        assert_eq!(compound.formula(), "Cl^2");
        assert_eq!(compound.count_of("Cl"), Some(2));
        assert_eq!(compound.count_of("Na"), None);
    }

    #[test]
    fn test_serializes_name_and_formula() {
        let compound = Compound::new("Sodium Chloride", [("Na", 1), ("Cl", 1)]);
        let json = serde_json::to_value(&compound).unwrap();
        assert_eq!(json["name"], "Sodium Chloride");
        assert_eq!(json["formula"], "Na^1Cl^1");
        assert_eq!(json["composition"][1]["symbol"], "Cl");
    }
}
