//! Naming and balancing helper commands

use crate::bonding::atoms_required_to_balance;
use crate::cli::CliError;
use crate::naming::{element_name_to_ion, roman_numeral};

/// Atom count for the `balance` command, or "impossible"
pub fn balance_text(charge: i32, opposing: i32) -> String {
    match atoms_required_to_balance(charge, opposing) {
        Some(atoms) => atoms.to_string(),
        None => "impossible".to_string(),
    }
}

/// Ion fragment for the `ion` command. `keep_ending` leaves the element's
/// ending as it is instead of switching it to `-ide`.
pub fn ion_text(name: &str, prefix: &str, keep_ending: bool) -> Result<String, CliError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidArgument(
            "element name cannot be empty".to_string(),
        ));
    }
    Ok(element_name_to_ion(name, prefix, !keep_ending))
}

/// Roman numeral for the `numeral` command
pub fn numeral_text(n: i32) -> Result<&'static str, CliError> {
    Ok(roman_numeral(n)?)
}

/// Handle the `balance` command
pub fn handle_balance(charge: i32, opposing: i32) -> Result<(), CliError> {
    println!("{}", balance_text(charge, opposing));
    Ok(())
}

/// Handle the `ion` command
pub fn handle_ion(name: &str, prefix: &str, keep_ending: bool) -> Result<(), CliError> {
    println!("{}", ion_text(name, prefix, keep_ending)?);
    Ok(())
}

/// Handle the `numeral` command
pub fn handle_numeral(n: i32) -> Result<(), CliError> {
    println!("{}", numeral_text(n)?);
    Ok(())
}
