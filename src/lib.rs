//! Watch a single linear unit chase a noisy, randomly generated boundary.
//!
//! The pipeline runs leaf-first: [`boundary::generate`] walks out the ground truth,
//! [`dataset::build`] normalizes it into samples, [`RegressionTrainer::step`]
//! sweeps them once per call, and [`sampler::sample`] turns the current line back
//! into pixels. [`Session`] wires the four together for a tick-driven caller.

pub mod boundary;
pub mod config;
pub mod dataset;
pub mod error;
mod point;
mod random;
pub mod sampler;
pub mod session;
pub mod snapshot;
mod state;
pub mod trainer;

pub use boundary::BoundaryWalk;
pub use config::{Config, ValidConfig};
pub use dataset::{TrainingSample, TrainingSet};
pub use error::{BoundaryErr, Result};
pub use point::Point;
pub use random::{RngSource, UniformSource};
pub use session::{Session, Snapshot};
pub use snapshot::SnapshotWriter;
pub use state::ModelState;
pub use trainer::RegressionTrainer;
