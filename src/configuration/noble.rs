/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Noble-gas reduction for abbreviated configuration strings

use super::usage::{Configuration, SubshellUsage};

/// Noble gases within the modeled range, ascending by atomic number
pub const NOBLE_GASES: [(i32, &str); 6] = [
    (2, "He"),
    (10, "Ne"),
    (18, "Ar"),
    (36, "Kr"),
    (54, "Xe"),
    (86, "Rn"),
];

/// The largest noble gas strictly below `atomic_number`, if any
///
/// The comparison is strict, so a noble gas reduces against the previous
/// one (neon renders as "[He] 2s2 2p6 ") and hydrogen and helium have no
/// reduction at all.
pub fn preceding_noble_gas(atomic_number: i32) -> Option<(i32, &'static str)> {
    NOBLE_GASES
        .iter()
        .rev()
        .find(|(noble_number, _)| atomic_number > *noble_number)
        .copied()
}

/// Remove from `usages` every entry whose subshell also appears in the
/// noble gas configuration
///
/// Both lists are sorted by shell rather than by filling order, so the
/// noble gas's subshells are not necessarily a positional prefix of the
/// atom's. Each noble entry is therefore located by (n, l) identity with
/// its own linear search rather than by a merge over positions.
pub(crate) fn remove_noble_usages(usages: &mut Vec<SubshellUsage>, noble: &Configuration) {
    for noble_usage in noble.usages() {
        if let Some(index) = usages
            .iter()
            .position(|usage| usage.subshell() == noble_usage.subshell())
        {
            usages.remove(index);
        }
    }
}
