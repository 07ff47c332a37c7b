//! Application state: view routing, pane state, popups, and the rules
//! for applying background-job results.
//!
//! Everything here is synchronous and side-effect free; the app loop
//! owns the one `AppState` and feeds it events. Fetch *initiation* is
//! split into `begin_*` methods that bump a sequence token and return
//! what the caller needs to spawn the job; `apply_api_event` discards
//! any result whose token is no longer the latest for its slot, which
//! makes "last selected wins" deterministic under out-of-order replies.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::api::{ApiError, DatasetKind, FileContent, ScrapeJob, ScrapeOutcome};
use crate::jobs::ApiEvent;

/// Row cap for the dashboard content tables.
pub const DATA_VIEW_ROW_CAP: usize = 100;
/// Row cap for the ticker view table.
pub const TICKER_ROW_CAP: usize = 50;
/// How long transient status messages stay visible after an action settles.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Sidebar navigation entries: view key and label.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("overview", "Overview"),
    ("history", "History"),
    ("analysis", "Analysis"),
    ("orders", "Orders"),
    ("dashboard", "Data"),
];

/// Ticker shortcuts shown in the sidebar.
pub const TICKERS: [&str; 5] = ["CSP1", "VHYL", "INFR", "IGL5", "XMWX"];

/// Panel resolved from a view key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Static panel with a title.
    Placeholder(&'static str),
    /// Scrape controls plus the two data panes.
    Dashboard,
    /// Market data for one ticker symbol (may be empty).
    Ticker(String),
}

impl View {
    /// Routes a view key to a panel. Total: every string maps to some
    /// panel; unknown keys (including `settings`) fall through to the
    /// default placeholder. A `ticker:` key takes the text between the
    /// first and second colon as the symbol, unchanged.
    pub fn from_key(key: &str) -> View {
        if key.starts_with("ticker:") {
            let symbol = key.split(':').nth(1).unwrap_or_default().to_string();
            return View::Ticker(symbol);
        }
        match key {
            "overview" => View::Placeholder("Overview"),
            "history" => View::Placeholder("History"),
            "analysis" => View::Placeholder("Analysis"),
            "orders" => View::Placeholder("Orders"),
            "dashboard" => View::Dashboard,
            _ => View::Placeholder("Select a View"),
        }
    }
}

/// Backend liveness as seen by the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Connected,
    #[default]
    Disconnected,
}

/// Popup severity, drives the color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Active popup. Only one can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Modal notification, dismissed with Enter/Esc.
    Alert { kind: AlertKind, message: String },
    /// Yes/no prompt offering navigation to the settings view.
    ConfirmSettings { message: String },
    /// Keybinding help.
    Help,
    /// Exit confirmation; confirming also asks the backend to shut down.
    QuitConfirm,
}

/// State of one data pane (reports or market).
#[derive(Debug, Default)]
pub struct DataPaneState {
    pub files: Vec<String>,
    pub list_loading: bool,
    /// Index into `files` of the selected entry.
    pub selected: Option<usize>,
    pub content: Option<FileContent>,
    pub content_loading: bool,
    /// Vertical scroll inside the capped content rows.
    pub content_scroll: usize,
    /// Latest issued list fetch token; older replies are stale.
    list_seq: u64,
    /// Latest issued content fetch token; older replies are stale.
    content_seq: u64,
}

impl DataPaneState {
    pub fn selected_file(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.files.get(i))
            .map(String::as_str)
    }

    pub fn select_up(&mut self) {
        match self.selected {
            Some(i) if i > 0 => self.selected = Some(i - 1),
            Some(_) => {}
            None if !self.files.is_empty() => self.selected = Some(0),
            None => {}
        }
    }

    pub fn select_down(&mut self) {
        match self.selected {
            Some(i) if i + 1 < self.files.len() => self.selected = Some(i + 1),
            Some(_) => {}
            None if !self.files.is_empty() => self.selected = Some(0),
            None => {}
        }
    }

    /// Clears selection and displayed content. Bumping the content token
    /// orphans any fetch still in flight.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.content = None;
        self.content_loading = false;
        self.content_scroll = 0;
        self.content_seq += 1;
    }
}

/// State of the ticker view while it is open.
#[derive(Debug)]
pub struct TickerPaneState {
    pub symbol: String,
    pub loading: bool,
    pub error: Option<String>,
    pub content: Option<FileContent>,
    pub content_scroll: usize,
    seq: u64,
}

/// Follow-up work `apply_api_event` asks the app loop to do.
#[derive(Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// A scrape settled successfully: re-fetch both file lists.
    RefreshLists,
}

/// Main application state.
pub struct AppState {
    /// Raw view key; the router turns it into a [`View`] at render time.
    pub active_view: String,
    pub connection: ConnectionStatus,
    /// Account balance from the last successful Trading212 scrape.
    pub balance: Option<f64>,
    pub t212_busy: bool,
    pub yfinance_busy: bool,
    /// Bumped on every successful scrape; the data panes re-fetch when
    /// it changes.
    pub refresh_counter: u64,
    /// Transient status line, with an optional auto-clear deadline.
    pub status_message: Option<String>,
    status_deadline: Option<Instant>,
    pub popup: PopupState,
    pub reports: DataPaneState,
    pub market: DataPaneState,
    /// Present while a ticker view is (or was last) open.
    pub ticker: Option<TickerPaneState>,
    /// Which dashboard pane has keyboard focus.
    pub focused_pane: DatasetKind,
    /// Monotonic token source for ticker lookups.
    ticker_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_view: "overview".to_string(),
            connection: ConnectionStatus::Disconnected,
            balance: None,
            t212_busy: false,
            yfinance_busy: false,
            refresh_counter: 0,
            status_message: None,
            status_deadline: None,
            popup: PopupState::None,
            reports: DataPaneState::default(),
            market: DataPaneState::default(),
            ticker: None,
            focused_pane: DatasetKind::Reports,
            ticker_seq: 0,
        }
    }

    pub fn pane(&self, kind: DatasetKind) -> &DataPaneState {
        match kind {
            DatasetKind::Reports => &self.reports,
            DatasetKind::Market => &self.market,
        }
    }

    pub fn pane_mut(&mut self, kind: DatasetKind) -> &mut DataPaneState {
        match kind {
            DatasetKind::Reports => &mut self.reports,
            DatasetKind::Market => &mut self.market,
        }
    }

    pub fn any_scrape_busy(&self) -> bool {
        self.t212_busy || self.yfinance_busy
    }

    /// Sets the status line. With a TTL the message clears itself on a
    /// later [`tick`](Self::tick).
    pub fn set_status(&mut self, message: impl Into<String>, ttl: Option<Duration>, now: Instant) {
        self.status_message = Some(message.into());
        self.status_deadline = ttl.and_then(|ttl| now.checked_add(ttl));
    }

    /// Periodic upkeep: expires the status line.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.status_deadline
            && now >= deadline
        {
            self.status_message = None;
            self.status_deadline = None;
        }
    }

    /// Marks a scrape as started. Returns `false` (and explains via the
    /// status line) when either job is already running; both actions are
    /// disabled while one is busy.
    pub fn begin_scrape(&mut self, job: ScrapeJob, now: Instant) -> bool {
        if self.any_scrape_busy() {
            self.set_status(
                "A scrape job is already running",
                Some(STATUS_MESSAGE_TTL),
                now,
            );
            return false;
        }
        match job {
            ScrapeJob::Trading212 => self.t212_busy = true,
            ScrapeJob::Yfinance => self.yfinance_busy = true,
        }
        self.set_status(format!("Scraping {}...", job.label()), None, now);
        true
    }

    /// Marks a list fetch as started and returns its token.
    pub fn begin_list_fetch(&mut self, kind: DatasetKind) -> u64 {
        let pane = self.pane_mut(kind);
        pane.list_loading = true;
        pane.list_seq += 1;
        pane.list_seq
    }

    /// Marks a content fetch for the focused selection as started.
    /// Returns the path and token, or `None` when nothing is selected.
    pub fn begin_content_fetch(&mut self, kind: DatasetKind) -> Option<(String, u64)> {
        let pane = self.pane_mut(kind);
        let path = pane.selected_file()?.to_string();
        pane.content_loading = true;
        pane.content_scroll = 0;
        pane.content_seq += 1;
        Some((path, pane.content_seq))
    }

    /// Opens (or re-opens) the ticker view for a symbol and returns the
    /// lookup token.
    pub fn begin_ticker_fetch(&mut self, symbol: &str) -> u64 {
        self.ticker_seq += 1;
        self.ticker = Some(TickerPaneState {
            symbol: symbol.to_string(),
            loading: true,
            error: None,
            content: None,
            content_scroll: 0,
            seq: self.ticker_seq,
        });
        self.ticker_seq
    }

    /// Applies a background-job result. Stale results (token mismatch)
    /// are dropped silently.
    pub fn apply_api_event(&mut self, event: ApiEvent, now: Instant) -> Option<FollowUp> {
        match event {
            ApiEvent::Health { connected } => {
                self.connection = if connected {
                    ConnectionStatus::Connected
                } else {
                    ConnectionStatus::Disconnected
                };
                None
            }
            ApiEvent::ScrapeFinished { job, result } => self.apply_scrape_finished(job, result, now),
            ApiEvent::FileList { kind, seq, result } => {
                if seq != self.pane(kind).list_seq {
                    return None;
                }
                let pane = self.pane_mut(kind);
                pane.list_loading = false;
                match result {
                    Ok(files) => {
                        // Keep the selection when the same path is still
                        // listed, otherwise drop it with the old content.
                        let selected_path = pane.selected_file().map(str::to_string);
                        pane.files = files;
                        match selected_path
                            .and_then(|p| pane.files.iter().position(|f| *f == p))
                        {
                            Some(idx) => pane.selected = Some(idx),
                            None => pane.clear_selection(),
                        }
                    }
                    Err(e) => {
                        warn!("failed to fetch {} file list: {e}", kind.title());
                        pane.files.clear();
                        pane.clear_selection();
                    }
                }
                None
            }
            ApiEvent::FileContent { kind, seq, result } => {
                if seq != self.pane(kind).content_seq {
                    return None;
                }
                let pane = self.pane_mut(kind);
                pane.content_loading = false;
                match result {
                    Ok(content) => pane.content = Some(content),
                    Err(e) => {
                        warn!("failed to fetch file content: {e}");
                        pane.content = None;
                    }
                }
                None
            }
            ApiEvent::TickerData { seq, result, .. } => {
                let Some(ticker) = self.ticker.as_mut() else {
                    return None;
                };
                if seq != ticker.seq {
                    return None;
                }
                ticker.loading = false;
                match result {
                    Ok(Some(content)) => ticker.content = Some(content),
                    Ok(None) => {
                        ticker.error =
                            Some("No data found. Ensure you are connected/scraped.".to_string());
                    }
                    Err(e) => {
                        warn!("ticker lookup failed: {e}");
                        ticker.error = Some("Failed to load ticker data".to_string());
                    }
                }
                None
            }
        }
    }

    fn apply_scrape_finished(
        &mut self,
        job: ScrapeJob,
        result: Result<ScrapeOutcome, ApiError>,
        now: Instant,
    ) -> Option<FollowUp> {
        match job {
            ScrapeJob::Trading212 => self.t212_busy = false,
            ScrapeJob::Yfinance => self.yfinance_busy = false,
        }
        match result {
            Ok(outcome) => {
                let status = if outcome.status.is_empty() {
                    "Completed".to_string()
                } else {
                    outcome.status.clone()
                };
                self.set_status(format!("Success: {status}"), Some(STATUS_MESSAGE_TTL), now);
                match job {
                    ScrapeJob::Trading212 => {
                        if outcome.status == "success" {
                            self.balance =
                                Some(outcome.cash.map(|c| c.total).unwrap_or_default());
                            self.popup = PopupState::Alert {
                                kind: AlertKind::Success,
                                message: "Trading212 data synced successfully!".to_string(),
                            };
                        }
                    }
                    ScrapeJob::Yfinance => {
                        self.popup = PopupState::Alert {
                            kind: AlertKind::Success,
                            message: "Stock info updated successfully!".to_string(),
                        };
                    }
                }
                self.refresh_counter += 1;
                Some(FollowUp::RefreshLists)
            }
            Err(e) => {
                warn!("{} scrape failed: {e}", job.label());
                self.set_status(
                    format!("Error: {}", e.detail()),
                    Some(STATUS_MESSAGE_TTL),
                    now,
                );
                self.popup = scrape_failure_popup(job, &e);
                None
            }
        }
    }
}

/// Chooses between the guided settings prompt and a generic alert, based
/// on the backend's `detail` text.
fn scrape_failure_popup(job: ScrapeJob, error: &ApiError) -> PopupState {
    match job {
        ScrapeJob::Trading212 => {
            if error.is_validation("API Keys missing") {
                PopupState::ConfirmSettings {
                    message: "API Keys are missing. Go to Settings to configure them?".to_string(),
                }
            } else {
                PopupState::Alert {
                    kind: AlertKind::Error,
                    message: format!("Failed to get Trading212 Info: {}", error.detail()),
                }
            }
        }
        ScrapeJob::Yfinance => {
            if error.is_validation("not found") || error.is_validation("is empty") {
                PopupState::ConfirmSettings {
                    message: "Tickers list is missing or empty. Go to Settings to configure tickers?"
                        .to_string(),
                }
            } else {
                PopupState::Alert {
                    kind: AlertKind::Error,
                    message: format!("Failed to get Stock Info: {}", error.detail()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CashBalance;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn router_maps_known_ids_to_their_placeholders() {
        assert_eq!(View::from_key("overview"), View::Placeholder("Overview"));
        assert_eq!(View::from_key("history"), View::Placeholder("History"));
        assert_eq!(View::from_key("analysis"), View::Placeholder("Analysis"));
        assert_eq!(View::from_key("orders"), View::Placeholder("Orders"));
        assert_eq!(View::from_key("dashboard"), View::Dashboard);
    }

    #[test]
    fn router_is_total_over_unknown_keys() {
        for key in ["", "settings", "nonsense", "ticker", "OVERVIEW", "tick:x"] {
            assert_eq!(
                View::from_key(key),
                View::Placeholder("Select a View"),
                "key {key:?}"
            );
        }
    }

    #[test]
    fn router_passes_ticker_symbol_through_unchanged() {
        assert_eq!(View::from_key("ticker:CSP1"), View::Ticker("CSP1".into()));
        // Malformed keys still route: empty symbol stays empty.
        assert_eq!(View::from_key("ticker:"), View::Ticker(String::new()));
        // Only the text between the first and second colon is the symbol.
        assert_eq!(View::from_key("ticker:AB:15m"), View::Ticker("AB".into()));
    }

    #[test]
    fn health_events_flip_connection_both_ways() {
        let mut state = AppState::new();
        for _ in 0..3 {
            state.apply_api_event(ApiEvent::Health { connected: false }, now());
            assert_eq!(state.connection, ConnectionStatus::Disconnected);
        }
        state.apply_api_event(ApiEvent::Health { connected: true }, now());
        assert_eq!(state.connection, ConnectionStatus::Connected);
        state.apply_api_event(ApiEvent::Health { connected: false }, now());
        assert_eq!(state.connection, ConnectionStatus::Disconnected);
    }

    #[test]
    fn scrape_busy_until_settled_and_blocks_concurrent_trigger() {
        let mut state = AppState::new();
        assert!(state.begin_scrape(ScrapeJob::Trading212, now()));
        assert!(state.t212_busy);

        // Second trigger (either job) is refused while one is running.
        assert!(!state.begin_scrape(ScrapeJob::Yfinance, now()));
        assert!(!state.begin_scrape(ScrapeJob::Trading212, now()));
        assert!(!state.yfinance_busy);

        state.apply_api_event(
            ApiEvent::ScrapeFinished {
                job: ScrapeJob::Trading212,
                result: Err(ApiError::Network("connection refused".into())),
            },
            now(),
        );
        assert!(!state.t212_busy);
        assert!(state.begin_scrape(ScrapeJob::Yfinance, now()));
    }

    #[test]
    fn t212_success_stores_balance_and_alerts() {
        let mut state = AppState::new();
        state.begin_scrape(ScrapeJob::Trading212, now());
        let follow_up = state.apply_api_event(
            ApiEvent::ScrapeFinished {
                job: ScrapeJob::Trading212,
                result: Ok(ScrapeOutcome {
                    status: "success".into(),
                    cash: Some(CashBalance { total: 1000.0 }),
                }),
            },
            now(),
        );
        assert_eq!(state.balance, Some(1000.0));
        assert_eq!(follow_up, Some(FollowUp::RefreshLists));
        assert_eq!(state.refresh_counter, 1);
        assert!(matches!(
            state.popup,
            PopupState::Alert { kind: AlertKind::Success, .. }
        ));
    }

    #[test]
    fn missing_api_keys_opens_settings_prompt_not_generic_alert() {
        let mut state = AppState::new();
        state.begin_scrape(ScrapeJob::Trading212, now());
        state.apply_api_event(
            ApiEvent::ScrapeFinished {
                job: ScrapeJob::Trading212,
                result: Err(ApiError::Backend {
                    status: 400,
                    detail: "API Keys missing for provider X".into(),
                }),
            },
            now(),
        );
        assert!(matches!(state.popup, PopupState::ConfirmSettings { .. }));
    }

    #[test]
    fn yfinance_empty_tickers_opens_settings_prompt() {
        let mut state = AppState::new();
        state.begin_scrape(ScrapeJob::Yfinance, now());
        state.apply_api_event(
            ApiEvent::ScrapeFinished {
                job: ScrapeJob::Yfinance,
                result: Err(ApiError::Backend {
                    status: 400,
                    detail: "tickers.txt is empty".into(),
                }),
            },
            now(),
        );
        assert!(matches!(state.popup, PopupState::ConfirmSettings { .. }));
    }

    #[test]
    fn other_failures_get_generic_error_alert() {
        let mut state = AppState::new();
        state.begin_scrape(ScrapeJob::Trading212, now());
        let follow_up = state.apply_api_event(
            ApiEvent::ScrapeFinished {
                job: ScrapeJob::Trading212,
                result: Err(ApiError::Backend {
                    status: 500,
                    detail: "scraper crashed".into(),
                }),
            },
            now(),
        );
        assert_eq!(follow_up, None);
        match &state.popup {
            PopupState::Alert { kind: AlertKind::Error, message } => {
                assert!(message.contains("scraper crashed"));
            }
            other => panic!("unexpected popup: {other:?}"),
        }
    }

    #[test]
    fn status_message_clears_after_ttl() {
        let mut state = AppState::new();
        let t0 = now();
        state.set_status("Error: boom", Some(STATUS_MESSAGE_TTL), t0);
        state.tick(t0 + Duration::from_secs(1));
        assert!(state.status_message.is_some());
        state.tick(t0 + Duration::from_secs(4));
        assert!(state.status_message.is_none());
    }

    fn content(name: &str) -> FileContent {
        FileContent {
            filename: name.to_string(),
            columns: vec!["Close".to_string()],
            data: Vec::new(),
        }
    }

    #[test]
    fn last_selected_file_wins_even_when_replies_arrive_out_of_order() {
        let mut state = AppState::new();
        state.reports.files = vec!["a.csv".to_string(), "b.csv".to_string()];
        state.reports.selected = Some(0);

        let (path_a, seq_a) = state.begin_content_fetch(DatasetKind::Reports).unwrap();
        assert_eq!(path_a, "a.csv");

        state.reports.selected = Some(1);
        let (path_b, seq_b) = state.begin_content_fetch(DatasetKind::Reports).unwrap();
        assert_eq!(path_b, "b.csv");

        // b.csv resolves first, then the stale a.csv reply trickles in.
        state.apply_api_event(
            ApiEvent::FileContent {
                kind: DatasetKind::Reports,
                seq: seq_b,
                result: Ok(content("b.csv")),
            },
            now(),
        );
        state.apply_api_event(
            ApiEvent::FileContent {
                kind: DatasetKind::Reports,
                seq: seq_a,
                result: Ok(content("a.csv")),
            },
            now(),
        );

        assert_eq!(state.reports.content.as_ref().unwrap().filename, "b.csv");
        assert!(!state.reports.content_loading);
    }

    #[test]
    fn clearing_selection_orphans_inflight_fetch() {
        let mut state = AppState::new();
        state.market.files = vec!["x.csv".to_string()];
        state.market.selected = Some(0);
        let (_, seq) = state.begin_content_fetch(DatasetKind::Market).unwrap();

        state.market.clear_selection();
        state.apply_api_event(
            ApiEvent::FileContent {
                kind: DatasetKind::Market,
                seq,
                result: Ok(content("x.csv")),
            },
            now(),
        );
        assert!(state.market.content.is_none());
    }

    #[test]
    fn list_refresh_preserves_selection_by_path() {
        let mut state = AppState::new();
        state.reports.files = vec!["a.csv".to_string(), "b.csv".to_string()];
        state.reports.selected = Some(1);

        let seq = state.begin_list_fetch(DatasetKind::Reports);
        state.apply_api_event(
            ApiEvent::FileList {
                kind: DatasetKind::Reports,
                seq,
                result: Ok(vec![
                    "new.csv".to_string(),
                    "a.csv".to_string(),
                    "b.csv".to_string(),
                ]),
            },
            now(),
        );
        assert_eq!(state.reports.selected, Some(2));

        // Path gone -> selection and content dropped.
        let seq = state.begin_list_fetch(DatasetKind::Reports);
        state.apply_api_event(
            ApiEvent::FileList {
                kind: DatasetKind::Reports,
                seq,
                result: Ok(vec!["other.csv".to_string()]),
            },
            now(),
        );
        assert_eq!(state.reports.selected, None);
    }

    #[test]
    fn list_fetch_failure_logs_and_leaves_list_empty() {
        let mut state = AppState::new();
        state.market.files = vec!["old.csv".to_string()];
        let seq = state.begin_list_fetch(DatasetKind::Market);
        state.apply_api_event(
            ApiEvent::FileList {
                kind: DatasetKind::Market,
                seq,
                result: Err(ApiError::Network("timeout".into())),
            },
            now(),
        );
        assert!(state.market.files.is_empty());
        assert!(!state.market.list_loading);
        // No user-visible error for list failures.
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn stale_list_reply_is_dropped() {
        let mut state = AppState::new();
        let old_seq = state.begin_list_fetch(DatasetKind::Reports);
        let _new_seq = state.begin_list_fetch(DatasetKind::Reports);
        state.apply_api_event(
            ApiEvent::FileList {
                kind: DatasetKind::Reports,
                seq: old_seq,
                result: Ok(vec!["stale.csv".to_string()]),
            },
            now(),
        );
        assert!(state.reports.files.is_empty());
        assert!(state.reports.list_loading);
    }

    #[test]
    fn ticker_lookup_reports_no_data_and_failures() {
        let mut state = AppState::new();
        let seq = state.begin_ticker_fetch("CSP1");
        assert!(state.ticker.as_ref().unwrap().loading);

        state.apply_api_event(
            ApiEvent::TickerData {
                symbol: "CSP1".into(),
                seq,
                result: Ok(None),
            },
            now(),
        );
        let ticker = state.ticker.as_ref().unwrap();
        assert!(!ticker.loading);
        assert_eq!(
            ticker.error.as_deref(),
            Some("No data found. Ensure you are connected/scraped.")
        );

        let seq = state.begin_ticker_fetch("VHYL");
        state.apply_api_event(
            ApiEvent::TickerData {
                symbol: "VHYL".into(),
                seq,
                result: Err(ApiError::Network("boom".into())),
            },
            now(),
        );
        assert_eq!(
            state.ticker.as_ref().unwrap().error.as_deref(),
            Some("Failed to load ticker data")
        );
    }

    #[test]
    fn reopening_ticker_view_orphans_previous_lookup() {
        let mut state = AppState::new();
        let old_seq = state.begin_ticker_fetch("CSP1");
        let _new_seq = state.begin_ticker_fetch("VHYL");
        state.apply_api_event(
            ApiEvent::TickerData {
                symbol: "CSP1".into(),
                seq: old_seq,
                result: Ok(Some(content("CSP1.csv"))),
            },
            now(),
        );
        let ticker = state.ticker.as_ref().unwrap();
        assert_eq!(ticker.symbol, "VHYL");
        assert!(ticker.content.is_none());
        assert!(ticker.loading);
    }
}
