//! Configuration validation.

use crate::axis::MAX_AXES;
use crate::error::{ConfigError, Error, Result};

use super::axis::AxisConfig;
use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - At least one and at most [`MAX_AXES`] axes are declared
/// - Steps per revolution is positive for every axis
/// - Acceleration and both cruise speeds are positive for every axis
/// - The slow zone threshold is positive
///
/// Note that `slow_speed > fast_speed` is deliberately allowed; the zone
/// evaluation applies whichever speed the zone selects.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    if config.axes.is_empty() {
        return Err(Error::Config(ConfigError::NoAxes));
    }
    if config.axes.len() > MAX_AXES {
        return Err(Error::Config(ConfigError::TooManyAxes(config.axes.len())));
    }
    if config.slow_zone_steps <= 0 {
        return Err(Error::Config(ConfigError::InvalidSlowZone(
            config.slow_zone_steps,
        )));
    }

    for axis in config.axes.iter() {
        validate_axis(axis)?;
    }

    Ok(())
}

fn validate_axis(config: &AxisConfig) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    if config.acceleration <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(
            config.acceleration,
        )));
    }

    if config.fast_speed <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidFastSpeed(
            config.fast_speed,
        )));
    }

    if config.slow_speed <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidSlowSpeed(
            config.slow_speed,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_axis() -> AxisConfig {
        AxisConfig {
            steps_per_revolution: 200,
            acceleration: 1000.0,
            fast_speed: 2000.0,
            slow_speed: 200.0,
            invert_direction: false,
        }
    }

    fn valid_config() -> SystemConfig {
        let mut axes = heapless::Vec::new();
        axes.push(valid_axis()).unwrap();
        SystemConfig {
            slow_zone_steps: 100,
            axes,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_axes_rejected() {
        let config = SystemConfig {
            slow_zone_steps: 100,
            axes: heapless::Vec::new(),
        };
        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::NoAxes))
        );
    }

    #[test]
    fn test_nonpositive_slow_zone_rejected() {
        let mut config = valid_config();
        config.slow_zone_steps = 0;
        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSlowZone(0)))
        );
    }

    #[test]
    fn test_zero_steps_per_revolution_rejected() {
        let mut config = valid_config();
        config.axes[0].steps_per_revolution = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_nonpositive_tuning_rejected() {
        for field in 0..3 {
            let mut config = valid_config();
            match field {
                0 => config.axes[0].acceleration = 0.0,
                1 => config.axes[0].fast_speed = -1.0,
                _ => config.axes[0].slow_speed = 0.0,
            }
            assert!(validate_config(&config).is_err());
        }
    }

    #[test]
    fn test_slow_faster_than_fast_allowed() {
        let mut config = valid_config();
        config.axes[0].slow_speed = 5000.0;
        assert!(validate_config(&config).is_ok());
    }
}
