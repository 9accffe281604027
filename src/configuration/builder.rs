/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Ground-state electron configuration generation

use super::errors::{ConfigurationError, Result};
use super::noble::{preceding_noble_gas, remove_noble_usages};
use super::occupancy::ShellOccupancy;
use super::usage::{Configuration, SubshellUsage};
use crate::shells::SubshellCatalog;

/// Generates ground-state configurations by filling the subshell catalog
/// in energy order
///
/// The builder borrows the shared, immutable catalog; every query
/// recomputes its result from scratch, so repeated calls with the same
/// atomic number always return equal values and the builder can be used
/// from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationBuilder {
    catalog: &'static SubshellCatalog,
}

impl ConfigurationBuilder {
    /// Create a builder over the shared subshell catalog
    pub fn new() -> Self {
        Self {
            catalog: SubshellCatalog::global(),
        }
    }

    /// The catalog this builder fills from
    pub fn catalog(&self) -> &SubshellCatalog {
        self.catalog
    }

    /// Compute the ground-state configuration for an atomic number
    ///
    /// Walks the catalog in filling order, assigning each subshell
    /// `min(remaining, max_electrons)` electrons until none remain, then
    /// re-sorts the usages into shell-then-subshell order for rendering.
    /// Subshells that receive no electrons are not recorded. An atomic
    /// number of zero or below yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::OutOfRange`] if electrons remain
    /// after every subshell of the first seven shells is full. The result
    /// is never truncated.
    pub fn configuration(&self, atomic_number: i32) -> Result<Configuration> {
        let mut usages = Vec::new();
        let mut remaining = atomic_number.max(0);
        for subshell in self.catalog.subshells() {
            if remaining == 0 {
                break;
            }
            let assigned = remaining.min(subshell.max_electrons());
            remaining -= assigned;
            usages.push(SubshellUsage::new(*subshell, assigned));
        }

        if remaining != 0 {
            return Err(ConfigurationError::OutOfRange {
                atomic_number,
                capacity: self.catalog.capacity(),
            });
        }

        // Canonical order for every rendered view is shell then subshell;
        // energy order is internal to the filling loop above.
        usages.sort_by_key(|usage| usage.subshell().shell_key());
        Ok(Configuration::new(usages))
    }

    /// The full configuration string, e.g. "1s2 2s2 2p6 3s2 3p1 "
    pub fn configuration_string(&self, atomic_number: i32) -> Result<String> {
        Ok(self.configuration(atomic_number)?.to_string())
    }

    /// The noble-gas-relative configuration string, e.g. "[Ne] 3s2 3p1 "
    ///
    /// The largest noble gas strictly below the atomic number supplies a
    /// bracketed prefix, and every subshell it occupies is removed from
    /// the rendered usages. Hydrogen and helium render in full.
    pub fn noble_relative_configuration_string(&self, atomic_number: i32) -> Result<String> {
        let configuration = self.configuration(atomic_number)?;
        let mut usages = configuration.usages().to_vec();

        let mut rendered = match preceding_noble_gas(atomic_number) {
            Some((noble_number, symbol)) => {
                let noble = self.configuration(noble_number)?;
                remove_noble_usages(&mut usages, &noble);
                format!("[{}] ", symbol)
            }
            None => String::new(),
        };
        for usage in &usages {
            rendered.push_str(&usage.to_string());
            rendered.push(' ');
        }
        Ok(rendered)
    }

    /// Electrons per principal shell, e.g. (2,8,3) for aluminium
    pub fn shell_occupancy(&self, atomic_number: i32) -> Result<ShellOccupancy> {
        Ok(ShellOccupancy::from_configuration(
            &self.configuration(atomic_number)?,
        ))
    }

    /// The shell occupancy string, e.g. "(2,8,3)"
    pub fn shell_occupancy_string(&self, atomic_number: i32) -> Result<String> {
        Ok(self.shell_occupancy(atomic_number)?.to_string())
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
