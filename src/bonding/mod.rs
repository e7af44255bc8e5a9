//! Bonding functionality
//!
//! Charge balancing and the two ways elements combine into a compound:
//! - Ionic elements bond with each other, named by electronegativity order
//! - Transition elements pick the lowest oxidation state that balances
//!
//! An impossible balance is not an error: the bond methods return `Ok(None)`.

mod ionic;
mod transition;

/// Smallest positive atom count `n` such that `n * charge + opposing == 0`.
///
/// Returns `None` when no positive integer count exists: charges of the same
/// sign, an opposing total that is not a multiple of `charge`, or a zero
/// charge against a non-zero opposing total.
///
/// # Examples
///
/// ```
/// use chemical_name_generator::bonding::atoms_required_to_balance;
///
/// assert_eq!(atoms_required_to_balance(1, -2), Some(2));
/// assert_eq!(atoms_required_to_balance(3, -3), Some(1));
/// assert_eq!(atoms_required_to_balance(2, -1), None);
/// assert_eq!(atoms_required_to_balance(0, -1), None);
/// ```
pub fn atoms_required_to_balance(charge: i32, opposing: i32) -> Option<u32> {
    if charge == 0 {
        return (opposing == 0).then_some(1);
    }

    let charge = i64::from(charge);
    let opposing = i64::from(opposing);
    if opposing % charge != 0 {
        return None;
    }

    let atoms = -opposing / charge;
    if atoms >= 1 {
        u32::try_from(atoms).ok()
    } else {
        None
    }
}

/// Total charge contributed by `count` atoms of one charge
pub(crate) fn total_charge(charge: i32, count: u32) -> i64 {
    i64::from(charge) * i64::from(count)
}

/// Balance against an opposing total that may not fit in an `i32`
pub(crate) fn balance_against_total(charge: i32, opposing: i64) -> Option<u32> {
    i32::try_from(opposing)
        .ok()
        .and_then(|opposing| atoms_required_to_balance(charge, opposing))
}
