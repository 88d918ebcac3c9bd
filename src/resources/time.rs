use bevy::prelude::*;

/// Simulated time advanced once per fixed step.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    /// Elapsed simulated time [s]
    pub time: f64,
    pub steps: u64,
}

impl SimClock {
    pub fn advance(&mut self, dt: f64) {
        self.time += dt;
        self.steps += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
