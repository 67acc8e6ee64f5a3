//! Report client — form-encoded POST to the reporting endpoint, JSON rows
//! back.
//!
//! The [`ReportSource`] trait abstracts over the transport so the dashboard
//! worker and the tests can swap in mocks. The HTTP implementation is
//! deliberately plain: no retries, no caching, a single 30s timeout. A
//! non-200 response surfaces its body text verbatim as the error message
//! because that is what the reporting service puts there.

use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

use crate::error::PipelineError;
use crate::query::ReportQuery;

/// Fixed reporting endpoint URL.
pub const REPORT_ENDPOINT: &str = "https://quantum-zero-bayfm.ondigitalocean.app/report";

/// One record per trading period, date ascending. Fields outside the
/// declared schema are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub profit_total: f64,
    pub win_count: u32,
    pub loss_count: u32,
}

/// Trait for report sources (HTTP service, test mocks).
pub trait ReportSource: Send {
    /// Fetch the ordered row sequence for a validated query.
    fn fetch(&self, query: &ReportQuery) -> Result<Vec<ReportRow>, PipelineError>;
}

/// HTTP implementation of [`ReportSource`].
pub struct HttpReportClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpReportClient {
    /// Client against the fixed production endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(REPORT_ENDPOINT)
    }

    /// Client against an arbitrary endpoint (tests point this at a
    /// loopback fixture server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Parse a 200 response body as an array of report rows.
    fn parse_rows(body: &str) -> Result<Vec<ReportRow>, PipelineError> {
        let rows: Vec<ReportRow> = serde_json::from_str(body)?;
        Ok(rows)
    }
}

impl Default for HttpReportClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for HttpReportClient {
    fn fetch(&self, query: &ReportQuery) -> Result<Vec<ReportRow>, PipelineError> {
        let resp = self.client.post(&self.endpoint).form(query).send()?;

        let status = resp.status();
        let body = resp.text()?;

        if status != reqwest::StatusCode::OK {
            return Err(PipelineError::Service(body));
        }

        Self::parse_rows(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn query() -> ReportQuery {
        ReportQuery {
            from_date: "2024-01-01".into(),
            to_date: "2024-01-31".into(),
            market: "EURUSD".into(),
            model: "m1".into(),
            node: "n1".into(),
        }
    }

    /// One-shot fixture server: accepts a single connection, drains the
    /// request, answers with a canned status line and body.
    fn fixture_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/report")
    }

    #[test]
    fn ok_response_parses_rows() {
        let endpoint = fixture_server(
            "HTTP/1.1 200 OK",
            r#"[{"date":"2024-01-01","profit_total":10.0,"win_count":2,"loss_count":1}]"#,
        );
        let client = HttpReportClient::with_endpoint(endpoint);
        let rows = client.fetch(&query()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].profit_total, 10.0);
        assert_eq!(rows[0].win_count, 2);
    }

    #[test]
    fn non_200_surfaces_body_verbatim() {
        let endpoint = fixture_server("HTTP/1.1 500 Internal Server Error", "internal error");
        let client = HttpReportClient::with_endpoint(endpoint);
        let err = client.fetch(&query()).unwrap_err();
        assert_eq!(err.to_string(), "internal error");
        assert!(matches!(err, PipelineError::Service(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let endpoint = fixture_server("HTTP/1.1 200 OK", "not json at all");
        let client = HttpReportClient::with_endpoint(endpoint);
        let err = client.fetch(&query()).unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"[{"date":"2024-01-01","profit_total":1.5,"win_count":1,"loss_count":0,"venue":"x","spread":0.2}]"#;
        let rows = HttpReportClient::parse_rows(body).unwrap();
        assert_eq!(rows[0].loss_count, 0);
    }

    #[test]
    fn empty_array_parses_to_no_rows() {
        let rows = HttpReportClient::parse_rows("[]").unwrap();
        assert!(rows.is_empty());
    }
}
