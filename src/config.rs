//! Configuration management for the login form
//!
//! Covers front-end behavior only; the validation rules themselves are
//! fixed and not configurable.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Interactive form configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    /// Maximum number of rejected submissions before the form gives up
    /// Environment: LOGIN_FORM_MAX_ATTEMPTS
    pub max_attempts: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl FormConfig {
    /// Load configuration from form.toml (if present) with environment
    /// overrides, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("max_attempts", FormConfig::default().max_attempts as u64)?
            .add_source(File::with_name("form").required(false))
            .add_source(Environment::with_prefix("LOGIN_FORM"))
            .build()?;

        let config: FormConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FormConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = FormConfig { max_attempts: 0 };
        assert!(config.validate().is_err());
    }
}
