use std::time::Duration;

use semdex_protocol::HostRequest;
use semdex_protocol::IndexingStatus;
use semdex_protocol::ProgressUpdate;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;
use tokio::time::interval;

use crate::app_event::AppEvent;
use crate::app_event_sender::AppEventSender;

/// Behavior knobs for the simulated host.
#[derive(Debug, Clone)]
pub(crate) struct HostProfile {
    /// Number of files the host pretends to index.
    pub total_files: usize,
    /// Wall-clock time between progress ticks.
    pub tick: Duration,
    /// Fail the first indexing pass once progress reaches this
    /// fraction.
    pub fail_at: Option<f64>,
    /// Report the injected failure as index corruption, which routes
    /// the indicator through the destructive-rebuild confirmation.
    pub corrupt_on_failure: bool,
}

impl Default for HostProfile {
    fn default() -> Self {
        Self {
            total_files: 200,
            tick: Duration::from_millis(80),
            fail_at: None,
            corrupt_on_failure: false,
        }
    }
}

/// In-process stand-in for the host side of the message channel.
///
/// Consumes `HostRequest`s and pushes `ProgressUpdate` snapshots back
/// through the app event channel, exactly the shape a real host would
/// use: unsolicited, order-preserving, uncorrelated with requests.
pub(crate) fn spawn_local_host(
    mut requests: UnboundedReceiver<HostRequest>,
    app_event_tx: AppEventSender,
    profile: HostProfile,
) {
    tokio::spawn(async move {
        let mut host = LocalHost::new(app_event_tx, profile);
        let mut ticker = interval(host.profile.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                request = requests.recv() => {
                    match request {
                        Some(request) => host.handle_request(request),
                        None => break,
                    }
                }
                _ = ticker.tick() => host.tick(),
            }
        }
    });
}

struct LocalHost {
    app_event_tx: AppEventSender,
    profile: HostProfile,
    status: IndexingStatus,
    /// Files processed in the current pass.
    processed: usize,
    /// The injected failure fires at most once per process.
    failure_armed: bool,
}

impl LocalHost {
    fn new(app_event_tx: AppEventSender, profile: HostProfile) -> Self {
        let failure_armed = profile.fail_at.is_some();
        Self {
            app_event_tx,
            profile,
            status: IndexingStatus::Loading,
            processed: 0,
            failure_armed,
        }
    }

    fn handle_request(&mut self, request: HostRequest) {
        match request {
            HostRequest::IndexingProgressBarInitialized => {
                // Replay the current state for a UI that attached late.
                self.push();
            }
            HostRequest::SetPaused(paused) => {
                tracing::info!(paused, "host received setPaused");
                match (self.status, paused) {
                    (IndexingStatus::Indexing, true) => {
                        self.status = IndexingStatus::Paused;
                        self.push();
                    }
                    (IndexingStatus::Paused, false) => {
                        self.status = IndexingStatus::Indexing;
                        self.push();
                    }
                    // Redundant requests (rapid clicks racing our
                    // echoes) are absorbed without a state change.
                    _ => {}
                }
            }
            HostRequest::ForceReIndex {
                should_clear_indexes,
            } => {
                tracing::info!(?should_clear_indexes, "host received forceReIndex");
                if should_clear_indexes == Some(true) {
                    // A cleared index cannot re-trip the corruption.
                    self.failure_armed = false;
                }
                self.processed = 0;
                self.status = IndexingStatus::Indexing;
                self.push();
            }
        }
    }

    fn tick(&mut self) {
        match self.status {
            IndexingStatus::Loading => {
                self.status = IndexingStatus::Indexing;
                self.push();
            }
            IndexingStatus::Indexing => {
                self.processed = (self.processed + 1).min(self.profile.total_files);
                let progress = self.progress();
                if self.failure_armed
                    && let Some(fail_at) = self.profile.fail_at
                    && progress >= fail_at
                {
                    self.failure_armed = false;
                    self.status = IndexingStatus::Failed;
                    self.app_event_tx.send(AppEvent::Progress(
                        ProgressUpdate::failed(
                            "simulated embedding failure",
                            self.profile.corrupt_on_failure,
                        ),
                    ));
                    return;
                }
                if self.processed >= self.profile.total_files {
                    self.status = IndexingStatus::Done;
                }
                self.push();
            }
            _ => {}
        }
    }

    fn progress(&self) -> f64 {
        if self.profile.total_files == 0 {
            return 1.0;
        }
        self.processed as f64 / self.profile.total_files as f64
    }

    fn push(&self) {
        let update = match self.status {
            IndexingStatus::Loading => ProgressUpdate::default(),
            IndexingStatus::Indexing => ProgressUpdate::new(
                IndexingStatus::Indexing,
                self.progress(),
                format!(
                    "Indexing file {} of {}",
                    self.processed.min(self.profile.total_files),
                    self.profile.total_files
                ),
            ),
            IndexingStatus::Paused => {
                ProgressUpdate::new(IndexingStatus::Paused, self.progress(), "Indexing paused")
            }
            IndexingStatus::Done => {
                ProgressUpdate::new(IndexingStatus::Done, 1.0, "Index up to date")
            }
            IndexingStatus::Failed => {
                ProgressUpdate::failed("simulated embedding failure", self.profile.corrupt_on_failure)
            }
            IndexingStatus::Disabled | IndexingStatus::Unknown => {
                ProgressUpdate::new(self.status, 0.0, "")
            }
        };
        self.app_event_tx.send(AppEvent::Progress(update));
    }
}
