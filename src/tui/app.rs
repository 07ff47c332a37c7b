//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::api::{BackendClient, DatasetKind};
use crate::jobs::{
    spawn_file_content, spawn_file_list, spawn_health_poller, spawn_scrape, spawn_ticker_lookup,
};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, FollowUp, View};

/// Main TUI application.
pub struct App {
    client: Arc<BackendClient>,
    state: AppState,
    /// Channel into the event loop, handed to background jobs. Absent
    /// until `run` wires it up.
    tx: Option<Sender<Event>>,
    should_quit: bool,
}

impl App {
    /// Creates a new App talking to the given backend.
    pub fn new(client: BackendClient) -> Self {
        Self {
            client: Arc::new(client),
            state: AppState::new(),
            tx: None,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration, poll_interval: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler and wire background jobs into its channel
        let events = EventHandler::new(tick_rate);
        self.tx = Some(events.sender());
        spawn_health_poller(self.client.clone(), events.sender(), poll_interval);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => self.state.tick(Instant::now()),
                Ok(Event::Key(key)) => {
                    let action = handle_key(&mut self.state, key);
                    self.dispatch(action, Instant::now());
                }
                Ok(Event::Resize(_)) => {
                    // Layout derives from the frame area; the next draw
                    // picks up the new size.
                }
                Ok(Event::Api(event)) => {
                    if let Some(follow_up) = self.state.apply_api_event(event, Instant::now()) {
                        match follow_up {
                            FollowUp::RefreshLists => self.refresh_lists(),
                        }
                    }
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Executes a key action that has side effects.
    fn dispatch(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ShutdownAndQuit => {
                info!("shutting down backend on exit");
                // Best effort; the UI quits either way.
                self.client.shutdown();
                self.should_quit = true;
            }
            KeyAction::OpenView(key) => self.open_view(key),
            KeyAction::Scrape(job) => {
                if self.state.begin_scrape(job, now)
                    && let Some(tx) = &self.tx
                {
                    spawn_scrape(self.client.clone(), tx.clone(), job);
                }
            }
            KeyAction::RefreshLists => self.refresh_lists(),
            KeyAction::LoadSelected => {
                let kind = self.state.focused_pane;
                if let Some((path, seq)) = self.state.begin_content_fetch(kind)
                    && let Some(tx) = &self.tx
                {
                    spawn_file_content(self.client.clone(), tx.clone(), kind, path, seq);
                }
            }
        }
    }

    /// Switches the active view and starts whatever fetches the new view
    /// needs.
    fn open_view(&mut self, key: String) {
        self.state.active_view = key;
        match View::from_key(&self.state.active_view) {
            View::Dashboard => self.refresh_lists(),
            View::Ticker(symbol) => {
                let seq = self.state.begin_ticker_fetch(&symbol);
                if let Some(tx) = &self.tx {
                    spawn_ticker_lookup(self.client.clone(), tx.clone(), symbol, seq);
                }
            }
            View::Placeholder(_) => {}
        }
    }

    /// Re-fetches both file lists.
    fn refresh_lists(&mut self) {
        for kind in [DatasetKind::Reports, DatasetKind::Market] {
            let seq = self.state.begin_list_fetch(kind);
            if let Some(tx) = &self.tx {
                spawn_file_list(self.client.clone(), tx.clone(), kind, seq);
            }
        }
    }
}
