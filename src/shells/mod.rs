/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Subshell catalog module
//!
//! This module defines the subshell quantum-number model and the fixed,
//! energy-ordered catalog of all subshells within the first seven
//! principal shells. The filling order of the catalog (the Madelung or
//! aufbau rule) determines every configuration the engine produces.

mod catalog;
mod subshell;

pub use catalog::{SubshellCatalog, MAX_PRINCIPAL_SHELL};
pub use subshell::{Subshell, SUBSHELL_CODES};
