use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    mapping, Color, MappingProfile, Result, SensorInventory, SensorKind, SensorSample, StatusBoard,
    TintError,
};

/// Serialises asynchronous sample delivery into the single-writer color fold.
///
/// Samples may arrive from any thread; the mutex guarantees only one fold
/// step runs at a time, so light (alpha) and acceleration (RGB) updates
/// interleave instead of merging. The mapping arithmetic itself stays in
/// [`mapping`] and remains pure.
#[derive(Debug)]
pub struct TintEngine {
    profile: MappingProfile,
    inventory: SensorInventory,
    state: Arc<Mutex<FoldState>>,
}

#[derive(Debug)]
struct FoldState {
    color: Color,
    board: StatusBoard,
    samples_folded: usize,
}

impl FoldState {
    fn new() -> Self {
        Self {
            color: Color::opaque_black(),
            board: StatusBoard::new(),
            samples_folded: 0,
        }
    }
}

impl TintEngine {
    /// Creates a new engine with the given mapping profile and the sensors
    /// the host device reports.
    pub fn new(profile: MappingProfile, inventory: SensorInventory) -> Self {
        Self {
            profile,
            inventory,
            state: Arc::new(Mutex::new(FoldState::new())),
        }
    }

    /// Engine with the demo defaults and every sensor present.
    pub fn with_defaults() -> Self {
        Self::new(MappingProfile::default(), SensorInventory::default())
    }

    pub fn profile(&self) -> &MappingProfile {
        &self.profile
    }

    pub fn inventory(&self) -> &SensorInventory {
        &self.inventory
    }

    /// Sensors the device lacks. The driver surfaces one notice per entry and
    /// never delivers that sample kind; nothing here is an error.
    pub fn missing_sensors(&self) -> Vec<SensorKind> {
        self.inventory.missing()
    }

    /// Whether the device can deliver this sample kind at all.
    pub fn accepts(&self, kind: SensorKind) -> bool {
        self.inventory.has(kind)
    }

    /// Resets the fold state and returns a shared read handle.
    pub fn start(&self) -> Result<TintHandle> {
        {
            let mut state = self.lock_state()?;
            *state = FoldState::new();
        }

        Ok(TintHandle::new(self.state.clone()))
    }

    /// Folds one sample into the current color and returns the new value.
    ///
    /// Proximity samples only refresh their status label; the color passes
    /// through unchanged.
    pub fn push_sample(&self, sample: &SensorSample) -> Result<Color> {
        let mut state = self.lock_state()?;
        let next = mapping::apply_sample(sample, state.color, &self.profile);
        state.color = next;
        state.board.observe(sample);
        state.board.set_color(next);
        state.samples_folded += 1;
        Ok(next)
    }

    /// Blacks out the RGB channels, preserving alpha (the reset button).
    pub fn reset(&self) -> Result<Color> {
        let mut state = self.lock_state()?;
        let next = mapping::reset_color(state.color);
        state.color = next;
        state.board.set_color(next);
        Ok(next)
    }

    pub fn current_color(&self) -> Result<Color> {
        Ok(self.lock_state()?.color)
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, FoldState>> {
        self.state
            .lock()
            .map_err(|_| TintError::msg("color state has been poisoned"))
    }
}

/// Shared, thread-safe view over the fold state managed by [`TintEngine`].
#[derive(Clone)]
pub struct TintHandle {
    shared: Arc<Mutex<FoldState>>,
}

impl TintHandle {
    pub(crate) fn new(shared: Arc<Mutex<FoldState>>) -> Self {
        Self { shared }
    }

    pub fn current_color(&self) -> Result<Color> {
        Ok(self.lock()?.color)
    }

    /// Snapshot of the four status labels.
    pub fn board(&self) -> Result<StatusBoard> {
        Ok(self.lock()?.board.clone())
    }

    pub fn samples_folded(&self) -> Result<usize> {
        Ok(self.lock()?.samples_folded)
    }

    fn lock(&self) -> Result<MutexGuard<'_, FoldState>> {
        self.shared
            .lock()
            .map_err(|_| TintError::msg("color state has been poisoned"))
    }
}

impl std::fmt::Debug for TintHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TintHandle").finish()
    }
}
