/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration engine module
//!
//! This module turns an atomic number into a ground-state electron
//! configuration and its derived views: the full subshell string, the
//! noble-gas-relative string and the per-shell occupancy summary. Filling
//! follows the Madelung order of the shared subshell catalog; all results
//! are plain values recomputed on every query.

mod builder;
mod errors;
pub mod noble;
mod occupancy;
mod usage;

pub use builder::ConfigurationBuilder;
pub use errors::{ConfigurationError, Result};
pub use occupancy::ShellOccupancy;
pub use usage::{Configuration, SubshellUsage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aluminium_views_agree() {
        let builder = ConfigurationBuilder::new();
        assert_eq!(
            builder.configuration_string(13).unwrap(),
            "1s2 2s2 2p6 3s2 3p1 "
        );
        assert_eq!(
            builder.noble_relative_configuration_string(13).unwrap(),
            "[Ne] 3s2 3p1 "
        );
        assert_eq!(builder.shell_occupancy_string(13).unwrap(), "(2,8,3)");
    }
}
