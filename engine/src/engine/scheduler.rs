//! Cancellable periodic task scheduling

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error};

/// Handle to a periodic task spawned with [`spawn_periodic`]
///
/// Cancelling stops the schedule; a run already in progress finishes first.
/// Dropping the handle cancels as well.
#[derive(Debug)]
pub struct ScheduleHandle {
    name: &'static str,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ScheduleHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stop scheduling further runs
    pub fn cancel(&self) {
        let _ = self.shutdown.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Cancel and wait for the in-flight run, if any, to complete
    pub async fn join(self) {
        self.cancel();
        if let Err(e) = self.task.await {
            error!("Scheduler {} terminated abnormally: {}", self.name, e);
        }
    }
}

/// Run `job` repeatedly until cancelled
///
/// The job returns the period to wait, measured from the start of that run.
/// A run that takes longer than its period is followed immediately by the
/// next one, so timing never accumulates drift.
pub fn spawn_periodic<F, Fut>(name: &'static str, mut job: F) -> ScheduleHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Duration> + Send + 'static,
{
    let (shutdown, mut cancelled) = watch::channel(false);

    let task = tokio::spawn(async move {
        debug!("⏰ Scheduler {} started", name);
        loop {
            if *cancelled.borrow() {
                break;
            }
            let started = Instant::now();
            let period = job().await;

            tokio::select! {
                _ = sleep_until(started + period) => {}
                // Err means the handle was dropped
                _ = cancelled.changed() => break,
            }
        }
        debug!("⏰ Scheduler {} stopped", name);
    });

    ScheduleHandle {
        name,
        shutdown,
        task,
    }
}
