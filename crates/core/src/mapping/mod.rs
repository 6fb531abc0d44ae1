//! Pure sample-to-color transformations.
//!
//! Every function here is a total function of (current color, new reading):
//! out-of-range inputs are clamped rather than rejected and no call path can
//! panic. The caller threads the returned color into the next call, so a
//! stream of samples folds into a single evolving ARGB value.

use serde::{Deserialize, Serialize};

use crate::{AccelerationSample, Channel, Color, SensorSample};

/// Tunables for the sample-to-color arithmetic.
///
/// The defaults reproduce the demo behavior: ambient light saturates at
/// 100 lux, acceleration axes are clamped to ±1.5, readings with every axis
/// below 0.5 are treated as jitter, and a full-scale axis swing nudges its
/// channel by ±15.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappingProfile {
    pub light_ceiling_lux: f32,
    pub axis_clamp: f32,
    pub dead_zone: f32,
    pub max_channel_delta: f32,
}

impl Default for MappingProfile {
    fn default() -> Self {
        Self {
            light_ceiling_lux: 100.0,
            axis_clamp: 1.5,
            dead_zone: 0.5,
            max_channel_delta: 15.0,
        }
    }
}

/// Blacks out the RGB channels while preserving the current alpha.
pub fn reset_color(current: Color) -> Color {
    Color::argb(current.alpha, 0, 0, 0)
}

/// Maps an ambient light reading onto the alpha channel.
///
/// The reading is clamped to [0, ceiling] and mapped linearly onto [0, 255],
/// truncating toward zero (50 lux with the default ceiling gives alpha 127).
/// RGB channels pass through untouched.
pub fn map_light_to_alpha(light_lux: f32, current: Color, profile: &MappingProfile) -> Color {
    let ceiling = profile.light_ceiling_lux.max(f32::EPSILON);
    let lux = light_lux.clamp(0.0, ceiling);
    current.with_alpha((lux * 255.0 / ceiling) as u8)
}

/// Nudges the color channel matching the dominant acceleration axis.
///
/// Axes are clamped to ±`axis_clamp`. A reading with every axis inside the
/// dead zone is jitter and leaves the color untouched. Otherwise the axis
/// with strictly greatest magnitude wins (x nudges red, y green, z blue) and
/// its clamped value maps linearly onto a signed delta of at most
/// ±`max_channel_delta`; the touched channel saturates at 0 and 255. When two
/// or more axes tie for the maximum, no axis wins and the color is returned
/// unchanged. Alpha always passes through untouched.
pub fn map_acceleration(
    sample: AccelerationSample,
    current: Color,
    profile: &MappingProfile,
) -> Color {
    let clamp = profile.axis_clamp.max(f32::EPSILON);
    let x = sample.x.clamp(-clamp, clamp);
    let y = sample.y.clamp(-clamp, clamp);
    let z = sample.z.clamp(-clamp, clamp);

    if x.abs() < profile.dead_zone && y.abs() < profile.dead_zone && z.abs() < profile.dead_zone {
        return current;
    }

    let winner = if x.abs() > y.abs() && x.abs() > z.abs() {
        Some((Channel::Red, x))
    } else if y.abs() > x.abs() && y.abs() > z.abs() {
        Some((Channel::Green, y))
    } else if z.abs() > x.abs() && z.abs() > y.abs() {
        Some((Channel::Blue, z))
    } else {
        // Equal-magnitude axes cancel out and nothing is nudged.
        None
    };

    match winner {
        Some((channel, value)) => current.offset_channel(channel, channel_delta(value, profile)),
        None => current,
    }
}

/// Linear map of a clamped axis value onto [-max_delta, max_delta],
/// truncating toward zero.
fn channel_delta(value: f32, profile: &MappingProfile) -> i32 {
    let clamp = profile.axis_clamp.max(f32::EPSILON);
    let span = profile.max_channel_delta;
    ((value + clamp) * (2.0 * span) / (2.0 * clamp) - span) as i32
}

/// Folds one sample into the current color.
///
/// Acceleration nudges one RGB channel, light rewrites alpha and proximity is
/// display-only, so it passes the color straight through.
pub fn apply_sample(sample: &SensorSample, current: Color, profile: &MappingProfile) -> Color {
    match sample {
        SensorSample::Acceleration(acceleration) => {
            map_acceleration(*acceleration, current, profile)
        }
        SensorSample::Light(light) => map_light_to_alpha(light.lux, current, profile),
        SensorSample::Proximity(_) => current,
    }
}

/// Formats a color the way the status label shows it.
pub fn describe_color(color: Color) -> String {
    color.describe()
}
