/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # aufbau-rs
//!
//! Ground-state electron shell configurations from the aufbau principle.
//!
//! Subshells fill in Madelung order (ascending n + l, ties by n) until the
//! atom's electrons are spent. From the filled configuration the crate
//! derives the display string ("1s2 2s2 2p6 3s2 3p1 "), the noble-gas
//! abbreviated form ("[Ne] 3s2 3p1 "), the per-shell occupancy ("(2,8,3)"),
//! and a periodic-table placement with a renderable 18-column grid.
//!
//! ```
//! use aufbau_rs::configuration::ConfigurationBuilder;
//!
//! let builder = ConfigurationBuilder::new();
//! let silicon = builder.configuration(14)?;
//! assert_eq!(silicon.to_string(), "1s2 2s2 2p6 3s2 3p2 ");
//! # Ok::<(), aufbau_rs::configuration::ConfigurationError>(())
//! ```

pub mod cli;
pub mod configuration;
pub mod elements;
pub mod shells;
pub mod table;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
