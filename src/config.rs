use std::{
    fs,
    num::{NonZeroU32, NonZeroU64, NonZeroUsize},
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{BoundaryErr, Result, sampler::DEFAULT_STRIDE, trainer::DEFAULT_LEARNING_RATE};

/// Raw, user-facing configuration as read from JSON.
///
/// Every field is optional in the file; missing ones fall back to `Default`.
/// Nothing here is trusted until `validate` turns it into a `ValidConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub learning_rate: f64,
    pub stride: usize,
    /// Milliseconds between training ticks.
    pub tick_ms: u64,
    /// Stop after this many epochs; run until interrupted when absent.
    pub max_epochs: Option<u64>,
    /// Seed for a reproducible boundary; the OS seeds it when absent.
    pub seed: Option<u64>,
    /// Directory that receives JSON snapshots; disabled when absent.
    pub snapshot_dir: Option<PathBuf>,
    pub snapshot_every: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 500,
            height: 300,
            learning_rate: DEFAULT_LEARNING_RATE,
            stride: DEFAULT_STRIDE.get(),
            tick_ms: 100,
            max_epochs: None,
            seed: None,
            snapshot_dir: None,
            snapshot_every: 1,
        }
    }
}

impl Config {
    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns `BoundaryErr::Io` if the file cannot be read and
    /// `BoundaryErr::Json` if it is not a valid configuration object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Checks every bound and produces the typed configuration.
    ///
    /// # Errors
    /// Returns `BoundaryErr::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<ValidConfig> {
        let width = positive_extent("width", self.width)?;
        let height = positive_extent("height", self.height)?;

        let stride = NonZeroUsize::new(self.stride)
            .ok_or_else(|| BoundaryErr::invalid("stride", "must be positive"))?;

        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(BoundaryErr::invalid(
                "learning_rate",
                format!("must be positive and finite, got {}", self.learning_rate),
            ));
        }

        let tick = NonZeroU64::new(self.tick_ms)
            .ok_or_else(|| BoundaryErr::invalid("tick_ms", "must be positive"))?;

        let max_epochs = match self.max_epochs {
            Some(n) => Some(
                NonZeroU64::new(n)
                    .ok_or_else(|| BoundaryErr::invalid("max_epochs", "must be positive"))?,
            ),
            None => None,
        };

        let snapshot_every = NonZeroU64::new(self.snapshot_every)
            .ok_or_else(|| BoundaryErr::invalid("snapshot_every", "must be positive"))?;

        Ok(ValidConfig {
            width,
            height,
            learning_rate: self.learning_rate,
            stride,
            tick,
            max_epochs,
            seed: self.seed,
            snapshot_dir: self.snapshot_dir.clone(),
            snapshot_every,
        })
    }
}

fn positive_extent(field: &'static str, v: i32) -> Result<NonZeroU32> {
    u32::try_from(v)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| BoundaryErr::invalid(field, format!("must be positive, got {v}")))
}

/// Configuration whose bounds have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConfig {
    width: NonZeroU32,
    height: NonZeroU32,
    learning_rate: f64,
    stride: NonZeroUsize,
    tick: NonZeroU64,
    max_epochs: Option<NonZeroU64>,
    seed: Option<u64>,
    snapshot_dir: Option<PathBuf>,
    snapshot_every: NonZeroU64,
}

impl ValidConfig {
    /// Domain width in pixels; always fits an `i32`.
    pub fn width(&self) -> i32 {
        self.width.get() as i32
    }

    /// Domain height in pixels; always fits an `i32`.
    pub fn height(&self) -> i32 {
        self.height.get() as i32
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn stride(&self) -> NonZeroUsize {
        self.stride
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick.get())
    }

    pub fn max_epochs(&self) -> Option<u64> {
        self.max_epochs.map(NonZeroU64::get)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn snapshot_dir(&self) -> Option<&Path> {
        self.snapshot_dir.as_deref()
    }

    pub fn snapshot_every(&self) -> u64 {
        self.snapshot_every.get()
    }
}
