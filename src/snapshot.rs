use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    num::NonZeroU64,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Serialize;

use crate::{BoundaryErr, Point, Result, session::Snapshot};

const BOUNDARY_FILE: &str = "boundary.json";

#[derive(Serialize)]
struct GroundTruth<'a> {
    width: i32,
    height: i32,
    points: &'a [Point],
}

/// Persists the ground truth once and selected per-epoch snapshots as JSON.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
    every: NonZeroU64,
}

impl SnapshotWriter {
    /// Creates `dir` if needed.
    ///
    /// # Errors
    /// Returns `BoundaryErr::Io` if the directory cannot be created and
    /// `BoundaryErr::InvalidConfig` if `every` is zero.
    pub fn create(dir: impl Into<PathBuf>, every: u64) -> Result<Self> {
        let every = NonZeroU64::new(every)
            .ok_or_else(|| BoundaryErr::invalid("snapshot_every", "must be positive"))?;
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, every })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `boundary.json`.
    pub fn write_boundary(&self, width: i32, height: i32, points: &[Point]) -> Result<PathBuf> {
        let path = self.dir.join(BOUNDARY_FILE);
        write_json(
            &path,
            &GroundTruth {
                width,
                height,
                points,
            },
        )?;
        Ok(path)
    }

    /// Writes `epoch-{n}.json` when the snapshot's epoch is due.
    ///
    /// # Returns
    /// The written path, or `None` when this epoch is skipped.
    pub fn record(&self, snapshot: &Snapshot) -> Result<Option<PathBuf>> {
        if snapshot.epoch % self.every.get() != 0 {
            return Ok(None);
        }

        let path = self.dir.join(format!("epoch-{}.json", snapshot.epoch));
        write_json(&path, snapshot)?;
        debug!("snapshot written to {}", path.display());
        Ok(Some(path))
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut out, value)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "linear-boundary-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn snapshot(epoch: u64) -> Snapshot {
        Snapshot {
            epoch,
            weight: 0.25,
            bias: 0.5,
            mse: 0.125,
            predicted: vec![Point::new(0, 150), Point::new(6, 152)],
        }
    }

    #[test]
    fn records_only_due_epochs() {
        let dir = scratch_dir("due");
        let writer = SnapshotWriter::create(&dir, 3).unwrap();

        assert!(writer.record(&snapshot(1)).unwrap().is_none());
        assert!(writer.record(&snapshot(2)).unwrap().is_none());

        let path = writer.record(&snapshot(3)).unwrap().unwrap();
        assert_eq!(path, dir.join("epoch-3.json"));

        let back: Snapshot = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, snapshot(3));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn boundary_file_lists_points() {
        let dir = scratch_dir("boundary");
        let writer = SnapshotWriter::create(&dir, 1).unwrap();
        let path = writer
            .write_boundary(10, 20, &[Point::new(6, 10), Point::new(12, 11)])
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        let v: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(v["width"], 10);
        assert_eq!(v["points"][1]["y"], 11);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn zero_interval_is_rejected() {
        let dir = scratch_dir("zero");
        assert!(matches!(
            SnapshotWriter::create(&dir, 0),
            Err(BoundaryErr::InvalidConfig { field: "snapshot_every", .. })
        ));
    }
}
