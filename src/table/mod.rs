/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic-table placement derived from shell occupancy
//!
//! The period is read off the number of occupied shells and the group off
//! the outer-shell electron count, corrected by the layout rules of the
//! standard 18-column table. Lanthanides and actinides are not placed:
//! they belong to the detached f-block rows this model does not lay out.

use crate::configuration::{ConfigurationBuilder, Result};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Rows in the rendered grid: period labels 0..=7
const GRID_ROWS: usize = 8;
/// Columns in the rendered grid: group labels 0..=18
const GRID_COLUMNS: usize = 19;

/// Whether an atomic number belongs to the lanthanide series (57..=71)
pub fn is_lanthanide(atomic_number: i32) -> bool {
    (57..=71).contains(&atomic_number)
}

/// Whether an atomic number belongs to the actinide series (89..=103)
pub fn is_actinide(atomic_number: i32) -> bool {
    (89..=103).contains(&atomic_number)
}

/// A (period, group) cell in the periodic table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TablePosition {
    /// Table row, 1..=7
    pub period: i32,
    /// Table column, 1..=18
    pub group: i32,
}

/// Compute the periodic-table cell for an atomic number
///
/// The period is the number of occupied shells. The group starts from the
/// outer-shell electron count and is then adjusted:
/// - helium is forced into the noble-gas column (group 18);
/// - period 2 with an occupied 2p subshell (more than 2 usages) shifts
///   right by 10 columns, past the gap left by the absent d block;
/// - period 3 with an occupied 3p subshell (more than 4 usages) shifts
///   right by 10 columns for the same reason;
/// - from period 4 on, electrons in the (period - 1) d subshell are added,
///   addressing the transition-metal columns by d-block position.
///
/// Returns `Ok(None)` for lanthanides and actinides, and for atomic
/// numbers with no occupied shells. Skipping the f-block series is a
/// deliberate gap: idealized lanthanum (4f1 with an 6s2 outer shell)
/// would otherwise land on barium's cell at (6, 2).
///
/// # Errors
///
/// Propagates [`crate::configuration::ConfigurationError::OutOfRange`]
/// from the underlying configuration query.
pub fn table_position(
    builder: &ConfigurationBuilder,
    atomic_number: i32,
) -> Result<Option<TablePosition>> {
    if is_lanthanide(atomic_number) || is_actinide(atomic_number) {
        return Ok(None);
    }

    let configuration = builder.configuration(atomic_number)?;
    let occupancy = builder.shell_occupancy(atomic_number)?;
    let outermost = match occupancy.outermost() {
        Some(electrons) => electrons,
        None => return Ok(None),
    };

    let period = occupancy.shell_count() as i32;
    let mut group = outermost;

    if atomic_number == 2 {
        // Helium closes the 1s shell and sits with the noble gases
        group = 18;
    }
    if period == 2 && configuration.len() > 2 {
        group += 10;
    }
    if period == 3 && configuration.len() > 4 {
        group += 10;
    }
    if period >= 4 {
        for usage in configuration.usages() {
            if usage.subshell().n() == period - 1 && usage.subshell().l() == 2 {
                group += usage.electrons();
            }
        }
    }

    Ok(Some(TablePosition { period, group }))
}

/// The 18-column periodic table as a sparse numeric grid
///
/// Row 0 carries the group labels and column 0 the period labels; cell
/// (0, 0) is unused. Every other non-zero cell holds the atomic number
/// placed there, and zero cells render blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicTable {
    cells: [[i32; GRID_COLUMNS]; GRID_ROWS],
}

impl PeriodicTable {
    /// Place every element from 1 to `max_z` into the grid
    ///
    /// Positions are computed in parallel -- every query reads the same
    /// immutable catalog -- and written in one sequential pass.
    /// Lanthanides and actinides are skipped, as is any position falling
    /// outside the rendered grid.
    pub fn build(builder: &ConfigurationBuilder, max_z: i32) -> Result<PeriodicTable> {
        let mut cells = [[0i32; GRID_COLUMNS]; GRID_ROWS];
        for (group, cell) in cells[0].iter_mut().enumerate() {
            *cell = group as i32;
        }
        for (period, row) in cells.iter_mut().enumerate() {
            row[0] = period as i32;
        }

        let placements: Vec<(i32, Option<TablePosition>)> = (1..=max_z)
            .into_par_iter()
            .map(|atomic_number| {
                table_position(builder, atomic_number).map(|position| (atomic_number, position))
            })
            .collect::<Result<_>>()?;

        for (atomic_number, position) in placements {
            let position = match position {
                Some(position) => position,
                None => continue,
            };
            match cells
                .get_mut(position.period as usize)
                .and_then(|row| row.get_mut(position.group as usize))
            {
                Some(cell) => *cell = atomic_number,
                None => debug!(
                    "element {} falls outside the rendered grid at period {}, group {}",
                    atomic_number, position.period, position.group
                ),
            }
        }

        Ok(PeriodicTable { cells })
    }

    /// The value at (period, group): an axis label on row or column 0, a
    /// placed atomic number, or zero for an empty cell
    pub fn cell(&self, period: usize, group: usize) -> Option<i32> {
        self.cells
            .get(period)
            .and_then(|row| row.get(group))
            .copied()
    }
}

impl fmt::Display for PeriodicTable {
    /// Renders each cell right-aligned in four columns, zeros blank
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &value in row {
                if value == 0 {
                    write!(f, "{:>4}", "")?;
                } else {
                    write!(f, "{:>4}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(atomic_number: i32) -> Option<TablePosition> {
        table_position(&ConfigurationBuilder::new(), atomic_number).unwrap()
    }

    #[test]
    fn test_main_group_placement() {
        assert_eq!(position(1), Some(TablePosition { period: 1, group: 1 }));
        assert_eq!(position(3), Some(TablePosition { period: 2, group: 1 }));
        assert_eq!(position(5), Some(TablePosition { period: 2, group: 13 }));
        assert_eq!(position(13), Some(TablePosition { period: 3, group: 13 }));
        assert_eq!(position(18), Some(TablePosition { period: 3, group: 18 }));
        assert_eq!(position(19), Some(TablePosition { period: 4, group: 1 }));
    }

    #[test]
    fn test_helium_is_a_noble_gas() {
        assert_eq!(position(2), Some(TablePosition { period: 1, group: 18 }));
    }

    #[test]
    fn test_d_block_addressing() {
        // Scandium: one 3d electron on top of the 4s2 outer shell
        assert_eq!(position(21), Some(TablePosition { period: 4, group: 3 }));
        // Iron: 3d6
        assert_eq!(position(26), Some(TablePosition { period: 4, group: 8 }));
        // Zinc: full 3d10
        assert_eq!(position(30), Some(TablePosition { period: 4, group: 12 }));
        // Gallium: 4p1 after the full d block
        assert_eq!(position(31), Some(TablePosition { period: 4, group: 13 }));
    }

    #[test]
    fn test_f_block_series_are_not_placed() {
        for atomic_number in 57..=71 {
            assert_eq!(position(atomic_number), None);
        }
        for atomic_number in 89..=103 {
            assert_eq!(position(atomic_number), None);
        }
        assert!(position(56).is_some());
        assert!(position(72).is_some());
        assert!(position(88).is_some());
        assert!(position(104).is_some());
    }

    #[test]
    fn test_nothing_to_place_for_zero_electrons() {
        assert_eq!(position(0), None);
    }

    #[test]
    fn test_grid_labels_and_cells() {
        let table = PeriodicTable::build(&ConfigurationBuilder::new(), 118).unwrap();
        for group in 0..19 {
            assert_eq!(table.cell(0, group), Some(group as i32));
        }
        for period in 0..8 {
            assert_eq!(table.cell(period, 0), Some(period as i32));
        }
        assert_eq!(table.cell(1, 1), Some(1)); // hydrogen
        assert_eq!(table.cell(1, 18), Some(2)); // helium
        assert_eq!(table.cell(6, 2), Some(56)); // barium, not lanthanum
        assert_eq!(table.cell(7, 18), Some(118)); // oganesson
        assert_eq!(table.cell(8, 0), None);
    }

    #[test]
    fn test_grid_rendering() {
        let table = PeriodicTable::build(&ConfigurationBuilder::new(), 2).unwrap();
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        // Row 0: blank corner then group labels, four columns per cell
        assert!(lines[0].starts_with("       1   2   3"));
        // Row 1: period label, hydrogen in group 1, helium in group 18
        assert!(lines[1].starts_with("   1   1"));
        assert!(lines[1].ends_with("   2"));
        assert_eq!(lines[1].len(), 4 * 19);
    }
}
