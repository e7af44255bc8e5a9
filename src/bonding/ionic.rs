//! Bonds between two ionic elements

use super::{balance_against_total, total_charge};
use crate::models::{Compound, IonicElement};
use crate::naming::{NamingError, element_name_to_ion, multiplicity_prefix};
use tracing::debug;

/// An element and how many of its atoms are in the compound
struct Share<'a> {
    element: &'a IonicElement,
    count: u32,
}

impl Share<'_> {
    fn prefix(&self) -> &'static str {
        if self.element.is_metal() {
            ""
        } else {
            multiplicity_prefix(self.count)
        }
    }
}

impl IonicElement {
    /// Bond `paired_count` atoms of `paired` with as many atoms of this
    /// element as it takes to cancel their charge.
    ///
    /// The less electronegative element is named first and keeps its ending;
    /// the other takes the `-ide` ending. Returns `Ok(None)` when the charges
    /// cannot be balanced with whole atoms.
    pub fn covalent_bond(
        &self,
        paired: &IonicElement,
        paired_count: u32,
    ) -> Result<Option<Compound>, NamingError> {
        let opposing = total_charge(paired.charge(), paired_count);
        let Some(atoms) = balance_against_total(self.charge(), opposing) else {
            debug!(
                "{} ({:+}) cannot balance {} x {} ({:+})",
                self.symbol(),
                self.charge(),
                paired_count,
                paired.symbol(),
                paired.charge()
            );
            return Ok(None);
        };

        let current = Share {
            element: self,
            count: atoms,
        };
        let other = Share {
            element: paired,
            count: paired_count,
        };

        let (electropositive, electronegative) =
            if self.electronegativity() > paired.electronegativity() {
                (other, current)
            } else {
                (current, other)
            };

        // A single electropositive atom is never "mono"
        let electropositive_prefix = if electropositive.count > 1 {
            electropositive.prefix()
        } else {
            ""
        };
        let electronegative_prefix = electronegative.prefix();

        let name = format!(
            "{} {}",
            element_name_to_ion(electropositive.element.name(), electropositive_prefix, false),
            element_name_to_ion(electronegative.element.name(), electronegative_prefix, true)
        );

        Ok(Some(Compound::new(
            name,
            [
                (electropositive.element.symbol(), electropositive.count),
                (electronegative.element.symbol(), electronegative.count),
            ],
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oxygen() -> IonicElement {
        IonicElement::new("Oxygen", "O", -2, 3.44)
    }

    #[test]
    fn test_carbon_monoxide() {
        let carbon = IonicElement::new("Carbon", "C", 2, 2.55);
        let compound = carbon.covalent_bond(&oxygen(), 1).unwrap().unwrap();
        assert_eq!(compound.name(), "Carbon Monoxide");
        assert_eq!(compound.formula(), "C^1O^1");
    }

    #[test]
    fn test_nonmetal_electropositive_takes_prefix() {
        let nitrogen = IonicElement::new("Nitrogen", "N", 1, 3.04);
        let compound = nitrogen.covalent_bond(&oxygen(), 1).unwrap().unwrap();
        assert_eq!(compound.name(), "Dinitrogen Monoxide");
        assert_eq!(compound.formula(), "N^2O^1");
    }

    #[test]
    fn test_metal_has_no_prefix() {
        let lithium = IonicElement::new("Lithium", "Li", 1, 0.98).metal(true);
        let compound = lithium.covalent_bond(&oxygen(), 1).unwrap().unwrap();
        assert_eq!(compound.name(), "Lithium Monoxide");
        assert_eq!(compound.formula(), "Li^2O^1");
    }

    #[test]
    fn test_paired_element_named_first_when_less_electronegative() {
        let chlorine = IonicElement::new("Chlorine", "Cl", -1, 3.16);
        let sodium = IonicElement::new("Sodium", "Na", 1, 0.93).metal(true);
        let compound = chlorine.covalent_bond(&sodium, 1).unwrap().unwrap();
        assert_eq!(compound.name(), "Sodium Monochloride");
        assert_eq!(compound.formula(), "Na^1Cl^1");
    }

    #[test]
    fn test_equal_electronegativity_names_self_first() {
        let boron = IonicElement::new("Boron", "B", 1, 2.0);
        let bromine = IonicElement::new("Bromine", "Br", -1, 2.0);
        let compound = boron.covalent_bond(&bromine, 2).unwrap().unwrap();
        assert_eq!(compound.name(), "Diboron Dibromide");
        assert_eq!(compound.formula(), "B^2Br^2");
    }

    #[test]
    fn test_impossible_balance_is_absent() {
        let magnesium = IonicElement::new("Magnesium", "Mg", 2, 1.31);
        let fluorine = IonicElement::new("Fluorine", "F", -1, 3.98);
        assert_eq!(magnesium.covalent_bond(&fluorine, 1), Ok(None));
    }

    #[test]
    fn test_large_counts_use_placeholder_prefix() {
        let hydrogen = IonicElement::new("Hydrogen", "H", 1, 2.20);
        let heavy = IonicElement::new("Nitrogen", "N", -12, 3.04);
        let compound = hydrogen.covalent_bond(&heavy, 1).unwrap().unwrap();
        assert_eq!(compound.name(), "(10+)hydrogen Mononitride");
        assert_eq!(compound.formula(), "H^12N^1");
    }
}
