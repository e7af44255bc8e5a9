//! Roman numerals for oxidation states and superscripts for atom counts

use super::NamingError;

const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Get the roman numeral for an oxidation state in 1..=10.
///
/// Anything outside the table is an error rather than a clamped value, so a
/// wrong numeral never ends up in a compound name.
pub fn roman_numeral(n: i32) -> Result<&'static str, NamingError> {
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| ROMAN_NUMERALS.get(index))
        .copied()
        .ok_or(NamingError::NumeralOutOfRange(n))
}

/// Format an atom count as a "power of" marker, e.g. `^2`
pub fn superscript(count: u32) -> String {
    format!("^{count}")
}
