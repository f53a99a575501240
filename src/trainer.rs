//! Sequential gradient descent for the single linear unit.
//!
//! Each sample updates the parameters immediately, so the order of the training
//! set matters. The error is scaled by `1 - output²`, the derivative of `tanh`
//! evaluated at the raw output, even though no `tanh` is ever applied to it.

use log::{debug, warn};

use crate::{BoundaryErr, ModelState, Result, TrainingSample};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Owns the model and applies one epoch of updates per `step`.
#[derive(Debug, Clone)]
pub struct RegressionTrainer {
    state: ModelState,
    learning_rate: f64,
}

impl RegressionTrainer {
    /// Creates a trainer with an untrained model.
    ///
    /// # Errors
    /// Returns `BoundaryErr::InvalidConfig` if `learning_rate` is not a positive,
    /// finite number.
    pub fn new(learning_rate: f64) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(BoundaryErr::invalid(
                "learning_rate",
                format!("must be positive and finite, got {learning_rate}"),
            ));
        }

        Ok(Self {
            state: Self::initialize(),
            learning_rate,
        })
    }

    /// The initial model state.
    pub fn initialize() -> ModelState {
        ModelState::new()
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Runs exactly one pass over `samples` and returns the updated state.
    pub fn step(&mut self, samples: &[TrainingSample]) -> &ModelState {
        let was_finite = self.state.is_finite();
        apply_epoch(&mut self.state, samples, self.learning_rate);

        let s = &self.state;
        debug!(epoch = s.epoch, weight = s.weight, bias = s.bias; "epoch complete");
        if was_finite && !s.is_finite() {
            warn!("model diverged at epoch {}", s.epoch);
        }

        &self.state
    }
}

/// Applies one epoch of the update rule to `state` in place.
///
/// An empty `samples` slice leaves the parameters untouched but still counts as
/// an epoch.
pub fn apply_epoch(state: &mut ModelState, samples: &[TrainingSample], learning_rate: f64) {
    for s in samples {
        let output = state.predict(s.x);
        let error = output - s.y;
        let scale = 1.0 - output.powi(2);

        state.bias -= error * scale * learning_rate;
        state.weight -= error * scale * learning_rate * s.x;
    }

    state.epoch += 1;
}
