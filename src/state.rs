use serde::{Deserialize, Serialize};

/// Parameters of the line `y = weight * x + bias` plus the number of completed
/// training passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    pub weight: f64,
    pub bias: f64,
    pub epoch: u64,
}

impl ModelState {
    /// The untrained line: `weight = 0`, `bias = 0`, no epochs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates the line at a normalized `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.weight * x + self.bias
    }

    /// Whether both parameters are still finite numbers.
    pub fn is_finite(&self) -> bool {
        self.weight.is_finite() && self.bias.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_flat_at_zero() {
        let state = ModelState::new();
        assert_eq!(state.epoch, 0);
        assert_eq!(state.predict(0.7), 0.0);
    }

    #[test]
    fn predicts_along_the_line() {
        let state = ModelState {
            weight: 0.5,
            bias: 0.25,
            epoch: 3,
        };
        assert_eq!(state.predict(1.0), 0.75);
        assert!(state.is_finite());
        assert!(!ModelState { bias: f64::NAN, ..state }.is_finite());
    }
}
