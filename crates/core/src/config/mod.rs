use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{MappingProfile, Result, SensorKind};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub mapping: MappingProfile,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub sensors: SensorInventory,
}

impl AppConfig {
    /// Defaults matching the original demo behavior.
    pub fn demo_defaults() -> Self {
        Self::default()
    }

    /// Loads a JSON configuration file. Absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Driver-side throttle settings for acceleration-derived updates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    pub min_interval_seconds: f32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            min_interval_seconds: 0.015,
        }
    }
}

/// Which sensors the host device actually has.
///
/// A missing sensor is not an error: the driver announces it once and simply
/// never delivers that sample kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorInventory {
    pub accelerometer: bool,
    pub light: bool,
    pub proximity: bool,
}

impl Default for SensorInventory {
    fn default() -> Self {
        Self {
            accelerometer: true,
            light: true,
            proximity: true,
        }
    }
}

impl SensorInventory {
    pub fn has(&self, kind: SensorKind) -> bool {
        match kind {
            SensorKind::Accelerometer => self.accelerometer,
            SensorKind::Light => self.light,
            SensorKind::Proximity => self.proximity,
        }
    }

    /// Sensors the device lacks, in display order.
    pub fn missing(&self) -> Vec<SensorKind> {
        [
            SensorKind::Accelerometer,
            SensorKind::Light,
            SensorKind::Proximity,
        ]
        .into_iter()
        .filter(|kind| !self.has(*kind))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_constants() {
        let config = AppConfig::demo_defaults();

        assert_eq!(config.mapping.light_ceiling_lux, 100.0);
        assert_eq!(config.mapping.axis_clamp, 1.5);
        assert_eq!(config.mapping.dead_zone, 0.5);
        assert_eq!(config.mapping.max_channel_delta, 15.0);
        assert_eq!(config.pacing.min_interval_seconds, 0.015);
        assert!(config.sensors.missing().is_empty());
    }

    #[test]
    fn partial_config_files_keep_defaults_elsewhere() {
        let config: AppConfig =
            serde_json::from_str("{\"sensors\":{\"accelerometer\":false,\"light\":true,\"proximity\":true}}")
                .unwrap();

        assert_eq!(config.sensors.missing(), vec![SensorKind::Accelerometer]);
        assert_eq!(config.pacing.min_interval_seconds, 0.015);
    }
}
