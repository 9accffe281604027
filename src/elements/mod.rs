/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element identities: symbols, names, and symbol lookup

mod database;

pub use database::{atomic_number_from_symbol, element_name, element_symbol};
