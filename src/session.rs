use std::num::NonZeroUsize;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    ModelState, Point, RegressionTrainer, Result, RngSource, TrainingSet, UniformSource, boundary,
    config::ValidConfig, dataset, sampler,
};

/// What a renderer needs after one training tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub epoch: u64,
    pub weight: f64,
    pub bias: f64,
    pub mse: f64,
    pub predicted: Vec<Point>,
}

/// A training run from a single generated boundary.
///
/// The boundary and its samples are fixed at construction. Each `tick` trains
/// one epoch and resamples the predicted line; the caller owns the cadence.
#[derive(Debug, Clone)]
pub struct Session {
    width: i32,
    height: i32,
    stride: NonZeroUsize,
    boundary: Vec<Point>,
    training: TrainingSet,
    trainer: RegressionTrainer,
    predicted: Vec<Point>,
}

impl Session {
    /// Generates the boundary from `source` and prepares an untrained model.
    ///
    /// # Errors
    /// Propagates normalization and trainer construction errors; neither occurs
    /// for a validated configuration.
    pub fn new<S: UniformSource>(cfg: &ValidConfig, source: S) -> Result<Self> {
        let (width, height) = (cfg.width(), cfg.height());

        let boundary: Vec<_> = boundary::generate(width, height, source).collect();
        let training = dataset::build(boundary.iter().copied(), width, height)?;
        let trainer = RegressionTrainer::new(cfg.learning_rate())?;

        info!(points = boundary.len(), width = width, height = height; "boundary generated");

        Ok(Self {
            width,
            height,
            stride: cfg.stride(),
            boundary,
            training,
            trainer,
            predicted: Vec::new(),
        })
    }

    /// Builds a session with the configured seed, or an OS-seeded source.
    pub fn from_config(cfg: &ValidConfig) -> Result<Self> {
        match cfg.seed() {
            Some(seed) => Self::new(cfg, RngSource::seeded(seed)),
            None => Self::new(cfg, RngSource::from_os()),
        }
    }

    /// Trains one epoch and resamples the predicted line.
    pub fn tick(&mut self) -> Result<Snapshot> {
        let state = *self.trainer.step(self.training.samples());
        self.predicted = sampler::sample(&state, self.width, self.height, self.stride)?;

        Ok(Snapshot {
            epoch: state.epoch,
            weight: state.weight,
            bias: state.bias,
            mse: self.training.mse(&state),
            predicted: self.predicted.clone(),
        })
    }

    /// The generated ground-truth points.
    pub fn boundary(&self) -> &[Point] {
        &self.boundary
    }

    pub fn samples(&self) -> &TrainingSet {
        &self.training
    }

    pub fn state(&self) -> &ModelState {
        self.trainer.state()
    }

    /// Points from the latest tick; empty before the first one.
    pub fn predicted(&self) -> &[Point] {
        &self.predicted
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
