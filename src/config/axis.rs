//! Axis configuration from TOML.

use serde::Deserialize;

/// Static configuration for one axis.
///
/// Axis identity is positional: the first `[[axes]]` entry is axis 0, and
/// indices are fixed for the process lifetime. The tuning fields are only
/// initial values; the `A`/`T`/`L` protocol verbs overwrite them at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Steps per output revolution (base steps times microstepping).
    pub steps_per_revolution: u32,

    /// Initial acceleration in steps per second squared.
    #[serde(rename = "acceleration_steps_per_sec2")]
    pub acceleration: f32,

    /// Initial cruise speed while far from target, in steps per second.
    #[serde(rename = "fast_speed_steps_per_sec")]
    pub fast_speed: f32,

    /// Initial cruise speed inside the slow zone, in steps per second.
    #[serde(rename = "slow_speed_steps_per_sec")]
    pub slow_speed: f32,

    /// Invert direction pin logic. Consumed by the actuator at
    /// construction; the core never reads it after startup.
    #[serde(default)]
    pub invert_direction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis_config() {
        let toml = r#"
steps_per_revolution = 3200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 2000.0
slow_speed_steps_per_sec = 200.0
"#;
        let config: AxisConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.steps_per_revolution, 3200);
        assert!((config.acceleration - 1000.0).abs() < 0.01);
        assert!((config.fast_speed - 2000.0).abs() < 0.01);
        assert!((config.slow_speed - 200.0).abs() < 0.01);
        assert!(!config.invert_direction);
    }
}
