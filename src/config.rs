//! Configuration management for the contact catalog.
//!
//! This module handles loading and validating configuration from
//! environment variables, optionally seeded from a .env file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter directive (default: "info")
    pub log_level: String,

    /// Starting capacity of the repository's backing vector (default: 16)
    pub initial_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_LOG_LEVEL`: tracing filter directive (default: "info")
    /// - `CONTACT_INITIAL_CAPACITY`: repository starting capacity (default: 16)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("CONTACT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let initial_capacity = Self::parse_env_usize("CONTACT_INITIAL_CAPACITY", 16)?;

        Ok(Config {
            log_level,
            initial_capacity,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            initial_capacity: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACT_LOG_LEVEL");
        env::remove_var("CONTACT_INITIAL_CAPACITY");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_LOG_LEVEL", "debug");
        guard.set("CONTACT_INITIAL_CAPACITY", "64");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    #[serial]
    fn test_config_invalid_capacity() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_INITIAL_CAPACITY", "not-a-number");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_INITIAL_CAPACITY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
