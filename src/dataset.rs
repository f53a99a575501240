use serde::{Deserialize, Serialize};

use crate::{BoundaryErr, ModelState, Point, Result};

/// A single normalized training pair: `x` is the model input, `y` the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub x: f64,
    pub y: f64,
}

impl TrainingSample {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The ordered, immutable set of samples the trainer sweeps once per epoch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    samples: Vec<TrainingSample>,
}

/// Normalizes boundary points into unit-interval samples, one per point, in order.
///
/// # Errors
/// Returns `BoundaryErr::ZeroExtent` if `width` or `height` is zero and
/// `BoundaryErr::InvalidConfig` if either is negative.
pub fn build<I>(points: I, width: i32, height: i32) -> Result<TrainingSet>
where
    I: IntoIterator<Item = Point>,
{
    let width = extent("width", width)?;
    let height = extent("height", height)?;

    // Single-precision quotient, widened, so samples match the pixel grid the
    // boundary was drawn on.
    let samples = points
        .into_iter()
        .map(|p| {
            TrainingSample::new(
                f64::from(p.x as f32 / width),
                f64::from(p.y as f32 / height),
            )
        })
        .collect();

    Ok(TrainingSet { samples })
}

fn extent(what: &'static str, v: i32) -> Result<f32> {
    match v {
        0 => Err(BoundaryErr::ZeroExtent { what }),
        v if v < 0 => Err(BoundaryErr::invalid(what, format!("must be positive, got {v}"))),
        v => Ok(v as f32),
    }
}

impl TrainingSet {
    /// Wraps already-normalized samples.
    pub fn from_samples(samples: Vec<TrainingSample>) -> Self {
        Self { samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingSample> {
        self.samples.iter()
    }

    /// Mean squared error of `state` over the set, `0.0` when empty.
    pub fn mse(&self, state: &ModelState) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }

        let total: f64 = self
            .samples
            .iter()
            .map(|s| (state.predict(s.x) - s.y).powi(2))
            .sum();

        total / self.samples.len() as f64
    }
}

impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a TrainingSample;
    type IntoIter = std::slice::Iter<'a, TrainingSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_corners() {
        let points = [Point::new(0, 0), Point::new(500, 300)];
        let set = build(points, 500, 300).unwrap();
        assert_eq!(
            set.samples(),
            &[TrainingSample::new(0.0, 0.0), TrainingSample::new(1.0, 1.0)]
        );
    }

    #[test]
    fn preserves_order_and_count() {
        let points = [Point::new(50, 30), Point::new(10, 270), Point::new(250, 150)];
        let set = build(points, 100, 300).unwrap();
        assert_eq!(set.len(), 3);

        let xs: Vec<_> = set.iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![0.5, 0.1_f32 as f64, 2.5]);
        assert_eq!(set.samples()[2].y, 0.5);
    }

    #[test]
    fn zero_extent_is_rejected() {
        let points = [Point::new(1, 1)];
        assert!(matches!(
            build(points, 0, 10),
            Err(BoundaryErr::ZeroExtent { what: "width" })
        ));
        assert!(matches!(
            build(points, 10, 0),
            Err(BoundaryErr::ZeroExtent { what: "height" })
        ));
    }

    #[test]
    fn negative_extent_is_a_config_error() {
        assert!(matches!(
            build([], -1, 10),
            Err(BoundaryErr::InvalidConfig { field: "width", .. })
        ));
    }

    #[test]
    fn empty_points_give_an_empty_set() {
        let set = build([], 10, 10).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.mse(&ModelState::new()), 0.0);
    }

    #[test]
    fn mse_of_a_perfect_fit_is_zero() {
        let set = TrainingSet::from_samples(vec![
            TrainingSample::new(0.0, 0.1),
            TrainingSample::new(1.0, 0.6),
        ]);
        let state = ModelState {
            weight: 0.5,
            bias: 0.1,
            epoch: 0,
        };
        assert!(set.mse(&state) < 1e-12);
        assert!((set.mse(&ModelState::new()) - (0.01 + 0.36) / 2.0).abs() < 1e-12);
    }
}
