//! Bonds between a transition element and an ionic element

use super::{balance_against_total, total_charge};
use crate::models::{Compound, IonicElement, TransitionElement};
use crate::naming::{NamingError, element_name_to_ion, roman_numeral};
use tracing::debug;

impl TransitionElement {
    /// Bond `paired_count` atoms of `paired` using the lowest oxidation state
    /// of this element that balances them.
    ///
    /// The name carries the chosen state as a roman numeral, e.g.
    /// "Iron (III) Oxide". Returns `Ok(None)` when no state balances, and
    /// [`NamingError::NumeralOutOfRange`] when the chosen state has no numeral.
    pub fn bond(
        &self,
        paired: &IonicElement,
        paired_count: u32,
    ) -> Result<Option<Compound>, NamingError> {
        let opposing = total_charge(paired.charge(), paired_count);

        let Some((charge, atoms)) = self.charges().iter().find_map(|&charge| {
            balance_against_total(charge, opposing).map(|atoms| (charge, atoms))
        }) else {
            debug!(
                "No oxidation state of {} {:?} balances {} x {}",
                self.symbol(),
                self.charges(),
                paired_count,
                paired.symbol()
            );
            return Ok(None);
        };

        let name = format!(
            "{} ({}) {}",
            self.name(),
            roman_numeral(charge)?,
            element_name_to_ion(paired.name(), "", true)
        );

        Ok(Some(Compound::new(
            name,
            [(self.symbol(), atoms), (paired.symbol(), paired_count)],
        )))
    }
}
