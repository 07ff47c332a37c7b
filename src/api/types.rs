//! Wire types for the scraper backend API.

use serde::Deserialize;
use serde_json::Value;

/// The two file categories exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Account history reports (`/data/reports`).
    Reports,
    /// Market data files (`/data/market`).
    Market,
}

impl DatasetKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            DatasetKind::Reports => "/data/reports",
            DatasetKind::Market => "/data/market",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DatasetKind::Reports => "History Reports",
            DatasetKind::Market => "Market Data",
        }
    }
}

/// The two scrape jobs the backend can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeJob {
    Trading212,
    Yfinance,
}

impl ScrapeJob {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ScrapeJob::Trading212 => "/scrape/t212",
            ScrapeJob::Yfinance => "/scrape/yfinance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrapeJob::Trading212 => "Trading212",
            ScrapeJob::Yfinance => "Yahoo Finance",
        }
    }
}

/// Cash block of a successful Trading212 scrape.
/// Only `total` is consumed; the backend sends more fields (`free`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct CashBalance {
    pub total: f64,
}

/// Payload of a successful scrape trigger.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeOutcome {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cash: Option<CashBalance>,
}

/// `GET /data/reports` payload.
#[derive(Debug, Deserialize)]
pub struct ReportListing {
    pub reports: Vec<String>,
}

/// `GET /data/market` payload.
#[derive(Debug, Deserialize)]
pub struct MarketListing {
    pub files: Vec<String>,
}

/// One row of a parsed data file: column name -> JSON value.
pub type Row = serde_json::Map<String, Value>;

/// `GET /data/content` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    pub filename: String,
    pub columns: Vec<String>,
    pub data: Vec<Row>,
}

impl FileContent {
    /// Display text for one cell. Missing and null values render empty.
    pub fn cell_text(row: &Row, column: &str) -> String {
        match row.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Error payload the backend attaches to 4xx/5xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Picks the file shown for a ticker: first market file whose name
/// contains the symbol. Substring match, so a symbol that is a prefix of
/// another ticker's filename can select the wrong file; the first entry
/// wins. Kept deliberately, see DESIGN.md.
pub fn find_market_file<'a>(files: &'a [String], symbol: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|f| f.contains(symbol))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_outcome_parses_cash_and_ignores_extra_fields() {
        let json = r#"{"status":"success","cash":{"free":100,"total":1000,"ppl":3.5}}"#;
        let outcome: ScrapeOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.status, "success");
        assert_eq!(outcome.cash.unwrap().total, 1000.0);
    }

    #[test]
    fn scrape_outcome_tolerates_missing_cash() {
        let outcome: ScrapeOutcome = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(outcome.cash.is_none());
    }

    #[test]
    fn listings_parse_their_own_field_names() {
        let reports: ReportListing =
            serde_json::from_str(r#"{"reports":["reports/a.csv","reports/b.csv"]}"#).unwrap();
        assert_eq!(reports.reports.len(), 2);

        let market: MarketListing =
            serde_json::from_str(r#"{"files":["market_data/CSP1.L_15m.csv"]}"#).unwrap();
        assert_eq!(market.files, vec!["market_data/CSP1.L_15m.csv"]);
    }

    #[test]
    fn file_content_parses_row_objects() {
        let json = r#"{
            "filename": "CSP1.L_15m.csv",
            "columns": ["Datetime", "Close"],
            "data": [
                {"Datetime": "2026-08-28 10:00", "Close": 512.3},
                {"Datetime": "2026-08-28 10:15", "Close": null}
            ]
        }"#;
        let content: FileContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.columns, vec!["Datetime", "Close"]);
        assert_eq!(content.data.len(), 2);
        assert_eq!(FileContent::cell_text(&content.data[0], "Close"), "512.3");
        assert_eq!(FileContent::cell_text(&content.data[1], "Close"), "");
        assert_eq!(FileContent::cell_text(&content.data[0], "Volume"), "");
    }

    #[test]
    fn find_market_file_takes_first_substring_match() {
        let files = vec![
            "market_data/VHYL.L_15m.csv".to_string(),
            "market_data/CSP1.L_15m.csv".to_string(),
            "market_data/CSP1.L_1d.csv".to_string(),
        ];
        assert_eq!(
            find_market_file(&files, "CSP1"),
            Some("market_data/CSP1.L_15m.csv")
        );
        assert_eq!(find_market_file(&files, "XMWX"), None);
        // Prefix collision: "CSP" matches the first CSP1 file. Documented
        // ambiguity, not corrected here.
        assert_eq!(
            find_market_file(&files, "CSP"),
            Some("market_data/CSP1.L_15m.csv")
        );
    }
}
