//! Headless driver loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use gravity_physics::ControlInput;
use tracing::{debug, info, warn};

use crate::frame_gate::FrameGate;
use crate::sandbox::Sandbox;

/// Cooperative stop flag, checked between frames only so a tick is never cut short.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Ticks between checks of a watched config file (about one second).
pub const RELOAD_INTERVAL_TICKS: u64 = 60;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many ticks. `None` runs until stopped.
    pub ticks: Option<u64>,
    /// Pace ticks with a [`FrameGate`] instead of running flat out.
    pub realtime: bool,
    /// Config directory to hot-reload from every [`RELOAD_INTERVAL_TICKS`].
    pub watch_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Host frames polled; equals `ticks` when not running in real time.
    pub frames: u64,
    pub stopped: bool,
}

/// Runs `sandbox` until the tick limit is reached or `stop` is raised.
///
/// `control` is sampled once per executed tick.
pub fn run(
    sandbox: &mut Sandbox,
    options: &RunOptions,
    stop: &StopSignal,
    mut control: impl FnMut(&Sandbox) -> ControlInput,
) -> RunSummary {
    let limit = options.ticks.unwrap_or(u64::MAX);
    let mut gate = FrameGate::new(Instant::now());
    let mut ticks = 0u64;
    let mut frames = 0u64;
    let mut last_checked = 0u64;

    info!(ticks = ?options.ticks, realtime = options.realtime, "run started");
    while ticks < limit && !stop.is_stopped() {
        frames += 1;
        if options.realtime {
            let now = Instant::now();
            let ran = gate.frame(
                now,
                || {
                    let input = control(sandbox);
                    sandbox.tick(input);
                },
                || {},
            );
            if ran {
                ticks += 1;
            } else {
                std::thread::sleep(gate.until_next(now));
            }
        } else {
            let input = control(sandbox);
            sandbox.tick(input);
            ticks += 1;
        }

        if ticks == last_checked || ticks % RELOAD_INTERVAL_TICKS != 0 {
            continue;
        }
        last_checked = ticks;
        if let Some(dir) = &options.watch_config {
            reload_config(sandbox, dir);
        }
        if ticks % (10 * RELOAD_INTERVAL_TICKS) == 0 {
            debug!(ticks, bodies = sandbox.world().bodies().len(), "still running");
        }
    }

    let stopped = stop.is_stopped();
    info!(ticks, frames, stopped, "run finished");
    RunSummary {
        ticks,
        frames,
        stopped,
    }
}

fn reload_config(sandbox: &mut Sandbox, dir: &Path) -> bool {
    match sandbox.reload(dir) {
        Ok(applied) => {
            if applied {
                info!("applied reloaded config");
            }
            applied
        }
        Err(e) => {
            warn!("config reload failed: {e}");
            false
        }
    }
}
