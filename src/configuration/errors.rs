/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for configuration generation

use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Error type for configuration generation
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The atomic number exceeds what the first seven shells can hold
    ///
    /// Raised when electrons remain after every catalog subshell is full.
    /// The computation is deterministic, so retrying cannot succeed.
    #[error("atomic number {atomic_number} exceeds the {capacity}-electron capacity of the first seven shells")]
    OutOfRange {
        /// The requested atomic number
        atomic_number: i32,
        /// Total electron capacity of the subshell catalog
        capacity: i32,
    },
}
