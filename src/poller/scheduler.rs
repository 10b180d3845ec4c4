// file: src/poller/scheduler.rs
// description: fixed-interval poll loop driving the renderer
// reference: tokio interval ticking with a single outstanding request

use crate::error::{MonitorError, Result};
use crate::models::StatusPayload;
use crate::poller::client::StatusSource;
use crate::render::{DisplaySurface, render};
use crate::utils::telemetry::{FetchTimer, PollStats, warn_if_slow};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

pub struct Poller<S> {
    source: Arc<S>,
    interval: Duration,
    max_ticks: Option<u64>,
}

impl<S> Poller<S>
where
    S: StatusSource + 'static,
{
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            interval,
            max_ticks: None,
        }
    }

    /// Stop after `max_ticks` requests have been issued and answered.
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One fetch-and-render step, awaited inline.
    pub async fn tick<D>(&self, surface: &mut D, stats: &mut PollStats)
    where
        D: DisplaySurface + ?Sized,
    {
        stats.ticks += 1;
        let timer = FetchTimer::start();
        let result = self.source.fetch().await;
        warn_if_slow(timer.elapsed(), self.interval);
        apply(result, surface, stats);
    }

    /// Poll until `shutdown` resolves or the tick budget is spent.
    ///
    /// Each request runs on its own task so the ticker keeps time, but a new
    /// request is only issued once the previous one has been applied. Ticks
    /// that land while a request is outstanding are skipped, which keeps
    /// renders in issue order. A fetch task that panics counts as a failed
    /// update and frees the slot for the next tick.
    pub async fn run<D, F>(&self, surface: &mut D, shutdown: F) -> PollStats
    where
        D: DisplaySurface + ?Sized,
        F: Future<Output = ()>,
    {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut fetch: Option<FetchHandle> = None;
        let mut stats = PollStats::new();

        tokio::pin!(shutdown);

        info!("Polling every {}ms", self.interval.as_millis());

        loop {
            let budget_spent = self.max_ticks.is_some_and(|max| stats.ticks >= max);
            if budget_spent && fetch.is_none() {
                info!("Tick budget of {} reached", stats.ticks);
                break;
            }

            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping poll loop");
                    break;
                }
                _ = ticker.tick() => {
                    if fetch.is_some() {
                        stats.skipped += 1;
                        debug!("Previous status request still in flight, skipping tick");
                        continue;
                    }

                    stats.ticks += 1;

                    let source = Arc::clone(&self.source);
                    fetch = Some(tokio::spawn(async move {
                        let timer = FetchTimer::start();
                        let result = source.fetch().await;
                        (result, timer.elapsed())
                    }));
                }
                joined = join_fetch(&mut fetch) => {
                    fetch = None;
                    let result = match joined {
                        Ok((result, elapsed)) => {
                            warn_if_slow(elapsed, self.interval);
                            result
                        }
                        Err(e) => Err(MonitorError::UpdateFailed(format!(
                            "Status fetch task failed: {}",
                            e
                        ))),
                    };
                    apply(result, surface, &mut stats);
                }
            }
        }

        if let Some(handle) = fetch.take() {
            handle.abort();
        }

        stats
    }
}

type FetchHandle = JoinHandle<(Result<StatusPayload>, Duration)>;

/// Resolves when the outstanding fetch finishes; never resolves when idle.
async fn join_fetch(
    fetch: &mut Option<FetchHandle>,
) -> std::result::Result<(Result<StatusPayload>, Duration), JoinError> {
    match fetch {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn apply<D>(result: Result<StatusPayload>, surface: &mut D, stats: &mut PollStats)
where
    D: DisplaySurface + ?Sized,
{
    match result {
        Ok(payload) => {
            render(&payload, surface);
            stats.succeeded += 1;
        }
        Err(e) => {
            error!("Failed to update dashboard: {}", e);
            stats.failed += 1;
        }
    }
}
