//! Naming functionality
//!
//! Turns element names into the fragments that make up a compound name:
//! - Multiplicity prefixes (mono, di, tri, ...)
//! - Ion names with the `-ide` ending (Oxygen -> Oxide)
//! - Oxidation-state numerals and formula superscripts (see [`numerals`])

pub mod numerals;

pub use numerals::{roman_numeral, superscript};

/// Placeholder rendered for atom counts the prefix table does not cover
pub const UNMAPPED_PREFIX: &str = "(10+)";

/// Multiplicity prefixes indexed by atom count - 1
const PREFIXES: [&str; 10] = [
    "mono", "di", "tri", "tetra", "penta", "hexa", "hepta", "octo", "nona", "deca",
];

/// Endings replaced by `-ide`, in priority order. Only the first match applies.
const ION_ENDINGS: [&str; 7] = ["ine", "ogen", "ygen", "orous", "on", "ium", "ur"];

const VOWELS: &str = "aeiou";

/// Error produced while building a compound name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    #[error("No roman numeral for {0}: supported range is 1..=10")]
    NumeralOutOfRange(i32),
}

/// Get the multiplicity prefix for an atom count.
///
/// Counts outside 1..=10 render as [`UNMAPPED_PREFIX`].
pub fn multiplicity_prefix(amount: u32) -> &'static str {
    amount
        .checked_sub(1)
        .and_then(|index| PREFIXES.get(index as usize))
        .copied()
        .unwrap_or(UNMAPPED_PREFIX)
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c.to_ascii_lowercase())
}

/// Convert an element name into the fragment used inside a compound name.
///
/// A trailing prefix vowel is dropped when the name also starts with a vowel
/// ("hepta" + "Oxygen" gives "Heptoxide", not "Heptaoxide"). With
/// `change_ending` the first recognised ending is swapped for `-ide`.
///
/// # Examples
///
/// ```
/// use chemical_name_generator::naming::element_name_to_ion;
///
/// assert_eq!(element_name_to_ion("Oxygen", "hepta", true), "Heptoxide");
/// assert_eq!(element_name_to_ion("Sulfur", "di", true), "Disulfide");
/// assert_eq!(element_name_to_ion("Lithium", "di", false), "Dilithium");
/// assert_eq!(element_name_to_ion("Chlorine", "", true), "Chloride");
/// ```
pub fn element_name_to_ion(name: &str, prefix: &str, change_ending: bool) -> String {
    let mut prefix = prefix;
    if let (Some(prefix_end), Some(name_start)) = (prefix.chars().last(), name.chars().next()) {
        if is_vowel(prefix_end) && is_vowel(name_start) {
            prefix = &prefix[..prefix.len() - prefix_end.len_utf8()];
        }
    }

    let mut body = name.to_string();
    if change_ending {
        if let Some(stem) = ION_ENDINGS
            .iter()
            .find_map(|ending| name.strip_suffix(ending))
        {
            body = format!("{stem}ide");
        }
    }

    // The prefix and name read as a single word
    if !prefix.is_empty() {
        body = lowercase_first(&body);
    }

    capitalize_first(&format!("{prefix}{body}"))
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
