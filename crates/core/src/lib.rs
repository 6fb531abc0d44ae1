//! Core library for the Sensor Tint application.
//!
//! The crate turns three device sensor streams (linear acceleration, ambient
//! light, proximity) into a single evolving ARGB background color plus a set
//! of status labels. The mapping arithmetic lives in [`mapping`] as pure
//! functions folded over the current color; everything stateful around it is
//! explicit — the [`engine`] serialises delivery, [`pace`] throttles
//! acceleration updates, [`trace`] replays recorded streams deterministically.

pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod pace;
pub mod sample;
pub mod status;
pub mod trace;

pub use color::{Channel, Color};
pub use config::{AppConfig, PacingConfig, SensorInventory};
pub use engine::{TintEngine, TintHandle};
pub use error::{Result, TintError};
pub use mapping::MappingProfile;
pub use pace::{SampleClock, UpdatePacer};
pub use sample::{AccelerationSample, LightSample, ProximitySample, SensorKind, SensorSample};
pub use status::StatusBoard;
pub use trace::{ColorStep, ReplayOutcome, SampleTrace, TracedSample};
