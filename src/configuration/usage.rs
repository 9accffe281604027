/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Subshell occupancy records and the assembled configuration

use crate::shells::Subshell;
use serde::Serialize;
use std::fmt;

/// Electron occupancy of one subshell within one atom's configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubshellUsage {
    /// The occupied subshell
    subshell: Subshell,
    /// Electrons assigned to it, 1..=subshell.max_electrons()
    electrons: i32,
}

impl SubshellUsage {
    /// Record `electrons` electrons assigned to `subshell`
    pub fn new(subshell: Subshell, electrons: i32) -> Self {
        Self {
            subshell,
            electrons,
        }
    }

    /// The occupied subshell
    pub fn subshell(&self) -> Subshell {
        self.subshell
    }

    /// Number of electrons assigned to the subshell
    pub fn electrons(&self) -> i32 {
        self.electrons
    }
}

impl fmt::Display for SubshellUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.subshell, self.electrons)
    }
}

/// The ground-state configuration produced for one atomic number
///
/// Usages are held in shell-then-subshell order (ascending n, then l),
/// the canonical order for rendering; the energy order used while filling
/// is internal to the engine. The electron counts sum to the atomic
/// number the configuration was computed for, and no subshell appears
/// twice. Configurations are plain values: recomputed per query, equal
/// whenever their contents are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    usages: Vec<SubshellUsage>,
}

impl Configuration {
    /// Wrap a shell-ordered usage list produced by the builder
    pub(crate) fn new(usages: Vec<SubshellUsage>) -> Self {
        Self { usages }
    }

    /// The occupied subshells in shell-then-subshell order
    pub fn usages(&self) -> &[SubshellUsage] {
        &self.usages
    }

    /// Total number of electrons across all subshells
    pub fn electron_count(&self) -> i32 {
        self.usages.iter().map(SubshellUsage::electrons).sum()
    }

    /// Number of occupied subshells
    pub fn len(&self) -> usize {
        self.usages.len()
    }

    /// Whether no subshell is occupied (atomic number zero)
    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }
}

impl fmt::Display for Configuration {
    /// Renders every usage followed by one space, trailing space
    /// included: "1s2 2s2 2p6 3s2 3p1 "
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for usage in &self.usages {
            write!(f, "{} ", usage)?;
        }
        Ok(())
    }
}
