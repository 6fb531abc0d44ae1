use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::TintError;

/// Linear acceleration along the three device axes, in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccelerationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Ambient light level in lux.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LightSample {
    pub lux: f32,
}

/// Distance reported by the proximity sensor, in centimetres.
///
/// Proximity readings are displayed verbatim and never mapped to color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProximitySample {
    pub distance_cm: f32,
}

/// A reading from one of the three supported sensors.
///
/// The tagged representation keeps dispatch exhaustive at compile time and
/// gives trace files a self-describing `sensor` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sensor", rename_all = "snake_case")]
pub enum SensorSample {
    Acceleration(AccelerationSample),
    Light(LightSample),
    Proximity(ProximitySample),
}

impl SensorSample {
    pub fn acceleration(x: f32, y: f32, z: f32) -> Self {
        Self::Acceleration(AccelerationSample { x, y, z })
    }

    pub fn light(lux: f32) -> Self {
        Self::Light(LightSample { lux })
    }

    pub fn proximity(distance_cm: f32) -> Self {
        Self::Proximity(ProximitySample { distance_cm })
    }

    /// Returns the sensor this sample came from.
    pub fn kind(&self) -> SensorKind {
        match self {
            Self::Acceleration(_) => SensorKind::Accelerometer,
            Self::Light(_) => SensorKind::Light,
            Self::Proximity(_) => SensorKind::Proximity,
        }
    }
}

/// Parses the one-line text form used by the stdin-driven live mode:
/// `acc X Y Z`, `light LUX` or `prox CM`.
impl FromStr for SensorSample {
    type Err = TintError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let keyword = parts
            .next()
            .ok_or_else(|| TintError::msg("empty sample line"))?;
        let values = parts
            .map(|token| {
                token
                    .parse::<f32>()
                    .map_err(|_| TintError::msg(format!("invalid number `{token}` in sample line")))
            })
            .collect::<Result<Vec<f32>, _>>()?;

        match (keyword, values.as_slice()) {
            ("acc", [x, y, z]) => Ok(Self::acceleration(*x, *y, *z)),
            ("light", [lux]) => Ok(Self::light(*lux)),
            ("prox", [distance_cm]) => Ok(Self::proximity(*distance_cm)),
            _ => Err(TintError::msg(format!(
                "unrecognised sample line `{line}`"
            ))),
        }
    }
}

/// Bare sensor discriminant, used for availability checks and pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Accelerometer,
    Light,
    Proximity,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Accelerometer => "accelerometer",
            Self::Light => "light",
            Self::Proximity => "proximity",
        };
        f.write_str(name)
    }
}
