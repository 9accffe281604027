/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! The energy-ordered catalog of subshells for the first seven shells

use super::subshell::Subshell;
use once_cell::sync::Lazy;

/// Highest principal quantum number covered by the catalog
pub const MAX_PRINCIPAL_SHELL: i32 = 7;

static GLOBAL_CATALOG: Lazy<SubshellCatalog> = Lazy::new(SubshellCatalog::new);

/// The fixed set of subshells reachable within the first seven principal
/// shells, stored in Madelung filling order
///
/// Every (n, l) pair with 1 <= n <= 7 and 0 <= l < n appears exactly once,
/// totally ordered by (n + l, n) ascending. The catalog is built once per
/// process and never mutated; electron filling walks it front to back.
#[derive(Debug)]
pub struct SubshellCatalog {
    subshells: Vec<Subshell>,
    capacity: i32,
}

impl SubshellCatalog {
    /// Build the catalog
    ///
    /// Enumerates all subshells for n in 1..=7 and sorts them with the
    /// explicit Madelung key. `Vec::sort_by_key` is stable, but ties are
    /// already resolved inside the key itself.
    pub fn new() -> Self {
        let mut subshells = Vec::with_capacity(28);
        for n in 1..=MAX_PRINCIPAL_SHELL {
            for l in 0..n {
                subshells.push(Subshell::new(n, l));
            }
        }
        subshells.sort_by_key(|subshell| subshell.energy_key());

        let capacity = subshells.iter().map(Subshell::max_electrons).sum();
        Self {
            subshells,
            capacity,
        }
    }

    /// The shared process-wide catalog
    ///
    /// Built on first access and read-only afterwards, so it can be
    /// borrowed from any number of threads without locking.
    pub fn global() -> &'static SubshellCatalog {
        &GLOBAL_CATALOG
    }

    /// Subshells in filling (energy) order
    pub fn subshells(&self) -> &[Subshell] {
        &self.subshells
    }

    /// Total number of electrons the catalog can accommodate
    ///
    /// 280 for the first seven shells (2 + 8 + 18 + 32 + 50 + 72 + 98).
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Number of subshells in the catalog
    pub fn len(&self) -> usize {
        self.subshells.len()
    }

    /// Whether the catalog is empty (never true for the built catalog)
    pub fn is_empty(&self) -> bool {
        self.subshells.is_empty()
    }
}

impl Default for SubshellCatalog {
    fn default() -> Self {
        Self::new()
    }
}
