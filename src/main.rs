use std::{env, path::Path, time::Duration};

use anyhow::Context;
use log::info;
use tokio::{
    signal,
    time::{self, MissedTickBehavior},
};

use linear_boundary::{Config, Session, SnapshotWriter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = match env::args_os().nth(1) {
        Some(path) => Config::load(&path)
            .with_context(|| format!("cannot load config from {}", Path::new(&path).display()))?,
        None => Config::default(),
    };
    let cfg = cfg.validate().context("invalid configuration")?;

    let mut session = Session::from_config(&cfg)?;

    let writer = match cfg.snapshot_dir() {
        Some(dir) => {
            let writer = SnapshotWriter::create(dir, cfg.snapshot_every())?;
            let path =
                writer.write_boundary(session.width(), session.height(), session.boundary())?;
            info!("ground truth written to {}", path.display());
            Some(writer)
        }
        None => None,
    };

    tokio::select! {
        ret = run(&mut session, writer.as_ref(), cfg.tick(), cfg.max_epochs()) => {
            ret?;
        }
        _ = signal::ctrl_c() => {
            info!("received interrupt, stopping");
        }
    }

    let s = session.state();
    info!(
        "finished at epoch {}: y = {:.6}x + {:.6}",
        s.epoch, s.weight, s.bias
    );

    Ok(())
}

/// Ticks the session on a fixed cadence until `max_epochs`, if any.
async fn run(
    session: &mut Session,
    writer: Option<&SnapshotWriter>,
    tick: Duration,
    max_epochs: Option<u64>,
) -> linear_boundary::Result<()> {
    let mut interval = time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let snapshot = session.tick()?;
        info!(
            epoch = snapshot.epoch,
            weight = snapshot.weight,
            bias = snapshot.bias,
            mse = snapshot.mse;
            "epoch {}", snapshot.epoch
        );

        if let Some(writer) = writer {
            writer.record(&snapshot)?;
        }

        if max_epochs.is_some_and(|max| snapshot.epoch >= max) {
            return Ok(());
        }
    }
}
