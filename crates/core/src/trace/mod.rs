use std::{cmp::Ordering, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    mapping, Color, MappingProfile, PacingConfig, Result, SensorKind, SensorSample, StatusBoard,
    UpdatePacer,
};

/// One recorded sensor reading with its capture timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracedSample {
    pub time_seconds: f32,
    #[serde(flatten)]
    pub sample: SensorSample,
}

/// An ordered recording of sensor readings that can be folded back into a
/// color deterministically.
///
/// Traces reproduce the original sampling cadence: replay paces acceleration
/// updates with the recorded timestamps instead of wall-clock, so the same
/// trace always yields the same color steps. The outcome stays in memory,
/// color state is never written anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleTrace {
    samples: Vec<TracedSample>,
}

impl SampleTrace {
    /// Builds a trace, ordering entries by capture time.
    pub fn new(mut samples: Vec<TracedSample>) -> Self {
        samples.sort_by(|a, b| {
            a.time_seconds
                .partial_cmp(&b.time_seconds)
                .unwrap_or(Ordering::Equal)
        });
        Self { samples }
    }

    /// Decodes a trace from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let decoded: Self = serde_json::from_str(json)?;
        Ok(Self::new(decoded.samples))
    }

    /// Reads a trace from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn samples(&self) -> &[TracedSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Folds the recorded samples into a color, starting from opaque black.
    ///
    /// Acceleration entries arriving faster than the configured interval are
    /// dropped by the pacer exactly as the live driver would drop them; light
    /// and proximity entries are never paced. Every admitted acceleration or
    /// light entry produces one [`ColorStep`], proximity only refreshes its
    /// status label.
    pub fn replay(&self, profile: &MappingProfile, pacing: &PacingConfig) -> ReplayOutcome {
        let mut pacer = UpdatePacer::from_config(pacing);
        let mut color = Color::opaque_black();
        let mut board = StatusBoard::new();
        let mut steps = Vec::new();
        let mut paced_out = 0;

        for traced in &self.samples {
            board.observe(&traced.sample);

            match traced.sample.kind() {
                SensorKind::Accelerometer if !pacer.admit(traced.time_seconds) => {
                    paced_out += 1;
                    continue;
                }
                SensorKind::Proximity => continue,
                _ => {}
            }

            color = mapping::apply_sample(&traced.sample, color, profile);
            board.set_color(color);
            steps.push(ColorStep {
                time_seconds: traced.time_seconds,
                color,
            });
        }

        ReplayOutcome {
            steps,
            final_color: color,
            board,
            paced_out,
        }
    }
}

/// One applied fold step of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStep {
    pub time_seconds: f32,
    pub color: Color,
}

/// Everything a deterministic replay produces.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    pub steps: Vec<ColorStep>,
    pub final_color: Color,
    pub board: StatusBoard,
    /// Acceleration entries dropped by the pacer.
    pub paced_out: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE_JSON: &str = r#"{
        "samples": [
            { "time_seconds": 0.0, "sensor": "light", "lux": 50.0 },
            { "time_seconds": 0.020, "sensor": "acceleration", "x": 1.5, "y": 0.0, "z": 0.0 },
            { "time_seconds": 0.025, "sensor": "acceleration", "x": 1.5, "y": 0.0, "z": 0.0 },
            { "time_seconds": 0.040, "sensor": "acceleration", "x": 1.5, "y": 0.0, "z": 0.0 },
            { "time_seconds": 0.050, "sensor": "proximity", "distance_cm": 2.0 }
        ]
    }"#;

    #[test]
    fn decodes_tagged_trace_entries() {
        let trace = SampleTrace::from_json(TRACE_JSON).unwrap();

        assert_eq!(trace.len(), 5);
        assert_eq!(trace.samples()[0].sample, SensorSample::light(50.0));
        assert_eq!(
            trace.samples()[4].sample,
            SensorSample::proximity(2.0)
        );
    }

    #[test]
    fn orders_entries_by_capture_time() {
        let trace = SampleTrace::new(vec![
            TracedSample {
                time_seconds: 0.5,
                sample: SensorSample::light(10.0),
            },
            TracedSample {
                time_seconds: 0.1,
                sample: SensorSample::light(90.0),
            },
        ]);

        assert_eq!(trace.samples()[0].time_seconds, 0.1);
        assert_eq!(trace.samples()[1].time_seconds, 0.5);
    }

    #[test]
    fn replay_paces_acceleration_bursts() {
        let trace = SampleTrace::from_json(TRACE_JSON).unwrap();
        let outcome = trace.replay(&MappingProfile::default(), &PacingConfig::default());

        // Light step, then the 0.020 and 0.040 acceleration steps; the 0.025
        // entry falls inside the 15 ms window and proximity never steps.
        assert_eq!(outcome.steps.len(), 3);
        assert_eq!(outcome.paced_out, 1);
        assert_eq!(outcome.final_color, Color::argb(127, 30, 0, 0));
        assert_eq!(outcome.board.proximity(), "Proximity: 2.00 cm");
    }

    #[test]
    fn replay_is_deterministic() {
        let trace = SampleTrace::from_json(TRACE_JSON).unwrap();
        let profile = MappingProfile::default();
        let pacing = PacingConfig::default();

        let first = trace.replay(&profile, &pacing);
        let second = trace.replay(&profile, &pacing);

        assert_eq!(first.steps, second.steps);
        assert_eq!(first.final_color, second.final_color);
    }

    #[test]
    fn empty_traces_replay_to_opaque_black() {
        let outcome =
            SampleTrace::default().replay(&MappingProfile::default(), &PacingConfig::default());

        assert!(outcome.steps.is_empty());
        assert_eq!(outcome.final_color, Color::opaque_black());
        assert_eq!(outcome.paced_out, 0);
    }
}
