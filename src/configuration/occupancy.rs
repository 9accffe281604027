/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Per-shell electron totals aggregated from a configuration

use super::usage::Configuration;
use crate::shells::MAX_PRINCIPAL_SHELL;
use serde::Serialize;
use std::fmt;

/// Electrons per principal shell, lowest shell first
///
/// The sequence ends at the highest occupied shell. Under the idealized
/// filling order the ns subshell is always reached before any subshell of
/// shell n + 1, so shells are occupied contiguously from n = 1 upward and
/// truncating at the first zero loses nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellOccupancy {
    per_shell: Vec<i32>,
}

impl ShellOccupancy {
    /// Sum a configuration's electrons by principal quantum number
    pub fn from_configuration(configuration: &Configuration) -> Self {
        let mut totals = [0i32; MAX_PRINCIPAL_SHELL as usize + 1];
        for usage in configuration.usages() {
            totals[usage.subshell().n() as usize] += usage.electrons();
        }

        let mut per_shell = Vec::new();
        for &electrons in &totals[1..] {
            if electrons == 0 {
                break;
            }
            per_shell.push(electrons);
        }
        Self { per_shell }
    }

    /// Electron counts per shell, n = 1 first
    pub fn per_shell(&self) -> &[i32] {
        &self.per_shell
    }

    /// Number of occupied shells
    pub fn shell_count(&self) -> usize {
        self.per_shell.len()
    }

    /// Electron count of the outermost occupied shell
    pub fn outermost(&self) -> Option<i32> {
        self.per_shell.last().copied()
    }

    /// Total electrons across all shells
    pub fn electron_count(&self) -> i32 {
        self.per_shell.iter().sum()
    }

    /// Whether no shell is occupied
    pub fn is_empty(&self) -> bool {
        self.per_shell.is_empty()
    }
}

impl fmt::Display for ShellOccupancy {
    /// Renders the counts comma-separated in parentheses: "(2,8,3)"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, electrons) in self.per_shell.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", electrons)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::usage::SubshellUsage;
    use crate::shells::Subshell;

    fn configuration(entries: &[(i32, i32, i32)]) -> Configuration {
        Configuration::new(
            entries
                .iter()
                .map(|&(n, l, electrons)| SubshellUsage::new(Subshell::new(n, l), electrons))
                .collect(),
        )
    }

    #[test]
    fn test_aggregates_by_shell() {
        // Aluminium: 1s2 2s2 2p6 3s2 3p1
        let occupancy = ShellOccupancy::from_configuration(&configuration(&[
            (1, 0, 2),
            (2, 0, 2),
            (2, 1, 6),
            (3, 0, 2),
            (3, 1, 1),
        ]));
        assert_eq!(occupancy.per_shell(), &[2, 8, 3]);
        assert_eq!(occupancy.shell_count(), 3);
        assert_eq!(occupancy.outermost(), Some(3));
        assert_eq!(occupancy.electron_count(), 13);
        assert_eq!(occupancy.to_string(), "(2,8,3)");
    }

    #[test]
    fn test_single_shell() {
        let occupancy = ShellOccupancy::from_configuration(&configuration(&[(1, 0, 1)]));
        assert_eq!(occupancy.per_shell(), &[1]);
        assert_eq!(occupancy.to_string(), "(1)");
    }

    #[test]
    fn test_empty_configuration() {
        let occupancy = ShellOccupancy::from_configuration(&Configuration::new(Vec::new()));
        assert!(occupancy.is_empty());
        assert_eq!(occupancy.outermost(), None);
        assert_eq!(occupancy.to_string(), "()");
    }
}
