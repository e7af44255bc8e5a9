//! Element models
//!
//! Ionic elements carry one fixed charge; transition elements carry several
//! possible oxidation states. Both share the naming transform in
//! [`crate::naming`] and are wrapped by [`ChemicalElement`] where either kind
//! is accepted.

use serde::{Deserialize, Serialize};

/// Element with a single fixed charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IonicElement {
    name: String,
    symbol: String,
    charge: i32,
    electronegativity: f32,
    #[serde(default)]
    metal: bool,
}

impl IonicElement {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        charge: i32,
        electronegativity: f32,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            charge,
            electronegativity,
            metal: false,
        }
    }

    /// Mark the element as a metal. Metals never take multiplicity prefixes.
    pub fn metal(mut self, metal: bool) -> Self {
        self.metal = metal;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn electronegativity(&self) -> f32 {
        self.electronegativity
    }

    pub fn is_metal(&self) -> bool {
        self.metal
    }

    /// Neutral elements form a compound of themselves alone
    pub fn is_neutral(&self) -> bool {
        self.charge == 0
    }
}

/// Element with several possible oxidation states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransitionEntry")]
pub struct TransitionElement {
    name: String,
    symbol: String,
    charges: Vec<i32>,
}

impl TransitionElement {
    /// Create a transition element. Charges are sorted ascending so bonding
    /// always tries the lowest oxidation state first.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, charges: impl Into<Vec<i32>>) -> Self {
        let mut charges = charges.into();
        charges.sort_unstable();
        Self {
            name: name.into(),
            symbol: symbol.into(),
            charges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Possible oxidation states, ascending
    pub fn charges(&self) -> &[i32] {
        &self.charges
    }
}

#[derive(Deserialize)]
struct TransitionEntry {
    name: String,
    symbol: String,
    charges: Vec<i32>,
}

impl TryFrom<TransitionEntry> for TransitionElement {
    type Error = String;

    fn try_from(entry: TransitionEntry) -> Result<Self, Self::Error> {
        if entry.charges.is_empty() {
            return Err(format!(
                "transition element {} has no charges",
                entry.symbol
            ));
        }
        Ok(Self::new(entry.name, entry.symbol, entry.charges))
    }
}

/// Either kind of element, as read from a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChemicalElement {
    Ionic(IonicElement),
    Transition(TransitionElement),
}

impl ChemicalElement {
    pub fn name(&self) -> &str {
        match self {
            ChemicalElement::Ionic(element) => element.name(),
            ChemicalElement::Transition(element) => element.name(),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            ChemicalElement::Ionic(element) => element.symbol(),
            ChemicalElement::Transition(element) => element.symbol(),
        }
    }
}

impl From<IonicElement> for ChemicalElement {
    fn from(element: IonicElement) -> Self {
        ChemicalElement::Ionic(element)
    }
}

impl From<TransitionElement> for ChemicalElement {
    fn from(element: TransitionElement) -> Self {
        ChemicalElement::Transition(element)
    }
}
