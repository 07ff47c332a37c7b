//! Terminal dashboard for a local trading data backend.
//!
//! Talks HTTP to the scraper service: triggers Trading212 and yfinance
//! scrape jobs, polls liveness, and browses the CSV files the backend
//! exposes. All network work runs on background threads feeding events
//! into the TUI loop.

pub mod api;
pub mod jobs;
pub mod tui;
