//! Error types for the loot configuration layer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure modes of configuration loading and lookup.

use thiserror::Error;

/// The main error type for the loot configuration layer.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle configuration failures consistently at the call site.
///
/// # Example
///
/// ```
/// use loot_config::error::LootError;
///
/// let error = LootError::ConfigNotFound {
///     path: "/missing/loot_config.json".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/loot_config.json"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LootError {
    /// Configuration file was not found or could not be read.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// Configuration file could not be parsed as JSON.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Loot category name was not found in the configuration.
    #[error("Loot category not found: {name}")]
    CategoryNotFound {
        /// The category name that was not found.
        name: String,
    },

    /// Spawn location name was not found in the configuration.
    #[error("Spawn location not found: {name}")]
    SpawnLocationNotFound {
        /// The spawn location name that was not found.
        name: String,
    },

    /// Loot tier name was not found in the tier configuration.
    #[error("Loot tier not found: {tier}")]
    TierNotFound {
        /// The tier name that was not found.
        tier: String,
    },
}

/// A type alias for Results that return LootError.
pub type LootResult<T> = Result<T, LootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = LootError::ConfigNotFound {
            path: "/missing/loot_config.json".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/loot_config.json"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = LootError::ConfigParseError {
            path: "/config/bad.json".to_string(),
            message: "expected value at line 3 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.json': expected value at line 3 column 1"
        );
    }

    #[test]
    fn test_category_not_found_displays_name() {
        let error = LootError::CategoryNotFound {
            name: "weapons_exotic".to_string(),
        };
        assert_eq!(error.to_string(), "Loot category not found: weapons_exotic");
    }

    #[test]
    fn test_spawn_location_not_found_displays_name() {
        let error = LootError::SpawnLocationNotFound {
            name: "orbital_station".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Spawn location not found: orbital_station"
        );
    }

    #[test]
    fn test_tier_not_found_displays_tier() {
        let error = LootError::TierNotFound {
            tier: "tier_9".to_string(),
        };
        assert_eq!(error.to_string(), "Loot tier not found: tier_9");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LootError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> LootResult<()> {
            Err(LootError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> LootResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
