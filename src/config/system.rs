//! System configuration - root configuration structure.

use heapless::Vec;
use serde::Deserialize;

use crate::axis::MAX_AXES;

use super::axis::AxisConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Distance from target, in steps, below which an axis cruises at its
    /// slow speed instead of its fast speed.
    #[serde(default = "default_slow_zone")]
    pub slow_zone_steps: i64,

    /// Axis configurations in index order.
    pub axes: Vec<AxisConfig, MAX_AXES>,
}

fn default_slow_zone() -> i64 {
    100
}

impl SystemConfig {
    /// Get an axis configuration by index.
    pub fn axis(&self, index: usize) -> Option<&AxisConfig> {
        self.axes.get(index)
    }

    /// Number of configured axes.
    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIX_AXIS_CONFIG: &str = r#"
slow_zone_steps = 100

[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 2000.0
slow_speed_steps_per_sec = 200.0

[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 2000.0
slow_speed_steps_per_sec = 200.0
invert_direction = true
"#;

    #[test]
    fn test_parse_system_config() {
        let config: SystemConfig = toml::from_str(SIX_AXIS_CONFIG).unwrap();
        assert_eq!(config.axis_count(), 2);
        assert_eq!(config.slow_zone_steps, 100);
        assert!(config.axis(1).unwrap().invert_direction);
        assert!(config.axis(2).is_none());
    }

    #[test]
    fn test_slow_zone_default() {
        let toml = r#"
[[axes]]
steps_per_revolution = 200
acceleration_steps_per_sec2 = 1000.0
fast_speed_steps_per_sec = 2000.0
slow_speed_steps_per_sec = 200.0
"#;
        let config: SystemConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.slow_zone_steps, 100);
    }
}
