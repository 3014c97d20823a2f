//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_console::load_config;
///
/// let config = load_config("axes.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 2000.0
slow_speed_steps_per_sec = 200.0
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.axis_count(), 1);
    }

    #[test]
    fn test_parse_rejects_invalid_tuning() {
        let toml = r#"
[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 0.0
fast_speed_steps_per_sec = 2000.0
slow_speed_steps_per_sec = 200.0
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(parse_config("axes = not toml").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/axes.toml");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
