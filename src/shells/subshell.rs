/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Subshell quantum numbers and their derived properties

use serde::Serialize;
use std::fmt;

/// Letter codes for subshells in spectroscopic notation, indexed by `l`
///
/// Covers l = 0..=6 (s through i), which is every angular momentum value
/// reachable within the first seven principal shells.
pub const SUBSHELL_CODES: [char; 7] = ['s', 'p', 'd', 'f', 'g', 'h', 'i'];

/// A subshell identified by its quantum number pair (n, l)
///
/// Physical subshells satisfy `n >= 1` and `0 <= l < n`; the catalog in
/// this module only ever constructs such pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subshell {
    /// Principal quantum number
    n: i32,
    /// Angular momentum quantum number
    l: i32,
}

impl Subshell {
    /// Create a subshell from its quantum numbers
    pub fn new(n: i32, l: i32) -> Self {
        Self { n, l }
    }

    /// Principal quantum number (n)
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Angular momentum quantum number (l)
    pub fn l(&self) -> i32 {
        self.l
    }

    /// Number of orbitals in this subshell (2l + 1)
    pub fn orbital_count(&self) -> i32 {
        2 * self.l + 1
    }

    /// Maximum number of electrons this subshell can hold
    ///
    /// One electron pair per orbital, i.e. 2(2l + 1).
    pub fn max_electrons(&self) -> i32 {
        2 * self.orbital_count()
    }

    /// Madelung energy ordering value (n + l)
    ///
    /// Subshells fill by ascending (n + l); ties resolve by ascending n.
    /// See <https://en.wikipedia.org/wiki/Aufbau_principle>
    pub fn energy_order(&self) -> i32 {
        self.n + self.l
    }

    /// Sort key for filling order: (n + l, n)
    ///
    /// Filling order and display order are different total orders over
    /// the same subshells, so `Subshell` implements neither `Ord` nor
    /// `PartialOrd`; each sort site passes the key it means.
    pub fn energy_key(&self) -> (i32, i32) {
        (self.energy_order(), self.n)
    }

    /// Sort key for display order: shell, then subshell (n, l)
    pub fn shell_key(&self) -> (i32, i32) {
        (self.n, self.l)
    }
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.n, SUBSHELL_CODES[self.l as usize])
    }
}
