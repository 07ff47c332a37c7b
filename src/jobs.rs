//! Background jobs for backend calls.
//!
//! Every backend operation runs on its own short-lived thread and reports
//! back as an [`ApiEvent`] on the application's event channel, so the UI
//! thread never blocks on the network. Threads hold only a channel sender
//! and an `Arc` of the client; a failed send means the application is
//! tearing down and the thread just exits.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::api::{ApiError, BackendClient, DatasetKind, FileContent, ScrapeJob, ScrapeOutcome};

/// Completion events produced by background jobs.
#[derive(Debug)]
pub enum ApiEvent {
    /// Result of one liveness probe.
    Health { connected: bool },
    /// A scrape job settled (success or failure).
    ScrapeFinished {
        job: ScrapeJob,
        result: Result<ScrapeOutcome, ApiError>,
    },
    /// A file list fetch settled.
    FileList {
        kind: DatasetKind,
        seq: u64,
        result: Result<Vec<String>, ApiError>,
    },
    /// A file content fetch settled.
    FileContent {
        kind: DatasetKind,
        seq: u64,
        result: Result<FileContent, ApiError>,
    },
    /// A ticker lookup settled. `Ok(None)` means no market file matched
    /// the symbol.
    TickerData {
        symbol: String,
        seq: u64,
        result: Result<Option<FileContent>, ApiError>,
    },
}

/// Spawns the health poller: immediate probe, then one probe per
/// `interval` until the receiving side of the channel is dropped.
pub fn spawn_health_poller<E>(client: Arc<BackendClient>, tx: Sender<E>, interval: Duration)
where
    E: From<ApiEvent> + Send + 'static,
{
    thread::spawn(move || {
        loop {
            let started = Instant::now();
            let connected = client.health_check().is_ok();
            if tx.send(ApiEvent::Health { connected }.into()).is_err() {
                // Application is gone; stop polling.
                break;
            }
            // Probe time counts against the interval: one probe per
            // `interval` wall-clock, not per interval-plus-probe.
            thread::sleep(next_probe_delay(interval, started.elapsed()));
        }
        debug!("health poller stopped");
    });
}

fn next_probe_delay(interval: Duration, probe_elapsed: Duration) -> Duration {
    interval.saturating_sub(probe_elapsed)
}

/// Spawns a scrape trigger.
pub fn spawn_scrape<E>(client: Arc<BackendClient>, tx: Sender<E>, job: ScrapeJob)
where
    E: From<ApiEvent> + Send + 'static,
{
    thread::spawn(move || {
        let result = client.trigger_scrape(job);
        let _ = tx.send(ApiEvent::ScrapeFinished { job, result }.into());
    });
}

/// Spawns a file list fetch for one pane.
pub fn spawn_file_list<E>(client: Arc<BackendClient>, tx: Sender<E>, kind: DatasetKind, seq: u64)
where
    E: From<ApiEvent> + Send + 'static,
{
    thread::spawn(move || {
        let result = client.list_files(kind);
        let _ = tx.send(ApiEvent::FileList { kind, seq, result }.into());
    });
}

/// Spawns a content fetch for one selected file.
pub fn spawn_file_content<E>(
    client: Arc<BackendClient>,
    tx: Sender<E>,
    kind: DatasetKind,
    path: String,
    seq: u64,
) where
    E: From<ApiEvent> + Send + 'static,
{
    thread::spawn(move || {
        let result = client.file_content(&path);
        let _ = tx.send(ApiEvent::FileContent { kind, seq, result }.into());
    });
}

/// Spawns a ticker lookup: list market files, take the first whose name
/// contains the symbol, fetch its content.
pub fn spawn_ticker_lookup<E>(client: Arc<BackendClient>, tx: Sender<E>, symbol: String, seq: u64)
where
    E: From<ApiEvent> + Send + 'static,
{
    thread::spawn(move || {
        let result = lookup_ticker(&client, &symbol);
        let _ = tx
            .send(ApiEvent::TickerData { symbol, seq, result }.into());
    });
}

fn lookup_ticker(
    client: &BackendClient,
    symbol: &str,
) -> Result<Option<FileContent>, ApiError> {
    let files = client.list_files(DatasetKind::Market)?;
    match crate::api::find_market_file(&files, symbol) {
        Some(path) => client.file_content(path).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    // A sender of ApiEvent itself satisfies the From bound, so jobs can
    // be exercised without the TUI event type.
    #[test]
    fn scrape_job_reports_failure_against_dead_backend() {
        // Port 9 (discard) is not listening; connect fails fast.
        let client = Arc::new(BackendClient::with_url("http://127.0.0.1:9"));
        let (tx, rx) = mpsc::channel::<ApiEvent>();

        spawn_scrape(client, tx, ScrapeJob::Trading212);

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            ApiEvent::ScrapeFinished { job, result } => {
                assert_eq!(job, ScrapeJob::Trading212);
                assert!(matches!(result, Err(ApiError::Network(_))));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn probe_time_counts_against_poll_interval() {
        let interval = Duration::from_secs(5);
        // Fast probe: sleep close to the full interval.
        assert_eq!(
            next_probe_delay(interval, Duration::from_millis(200)),
            Duration::from_millis(4800)
        );
        // Slow probe (timeout-bound): no extra sleep on top.
        assert_eq!(
            next_probe_delay(interval, Duration::from_secs(4)),
            Duration::from_secs(1)
        );
        assert_eq!(
            next_probe_delay(interval, Duration::from_secs(6)),
            Duration::ZERO
        );
    }

    #[test]
    fn health_poller_stops_when_receiver_dropped() {
        let client = Arc::new(BackendClient::with_url("http://127.0.0.1:9"));
        let (tx, rx) = mpsc::channel::<ApiEvent>();

        spawn_health_poller(client, tx, Duration::from_millis(10));

        // First probe fails -> disconnected.
        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            ApiEvent::Health { connected } => assert!(!connected),
            other => panic!("unexpected event: {other:?}"),
        }
        // Dropping the receiver ends the poller on its next send; nothing
        // to assert beyond not hanging.
        drop(rx);
    }
}
