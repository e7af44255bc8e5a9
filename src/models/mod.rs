//! Models module
//!
//! Elements that go into a compound and the compound value they produce.

pub mod compound;
pub mod element;

pub use compound::{Compound, FormulaTerm};
pub use element::{ChemicalElement, IonicElement, TransitionElement};
