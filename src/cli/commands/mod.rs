//! CLI command implementations

pub mod elements;
pub mod generate;
pub mod naming;
