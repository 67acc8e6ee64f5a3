//! Structured error types for one pipeline run.
//!
//! Every variant is local to a single run: the dashboard clears its display,
//! shows the message, and waits for the next trigger. Nothing here crashes
//! the process.

use thiserror::Error;

/// Errors surfaced by the report pipeline.
///
/// Display strings are user-facing: the TUI status bar shows them verbatim,
/// and two of them (`MissingParameter`, `Service`) have exact wording the
/// reporting workflow depends on.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required query field was absent. Carries the label of the FIRST
    /// missing field in priority order (Start Date, End Date, Market,
    /// Model, Node).
    #[error("Missing parameter - {0}")]
    MissingParameter(&'static str),

    /// The reporting service answered with a non-200 status. The body text
    /// is shown to the user verbatim.
    #[error("{0}")]
    Service(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response carried a body that does not parse as report rows.
    #[error("malformed report payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The selected window contains no rows; no statistics exist.
    #[error("No data for the selected window")]
    NoData,

    /// The selected window contains rows but zero trades, so the win ratio
    /// is undefined.
    #[error("No trades in the selected window")]
    NoTrades,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_wording_is_exact() {
        let err = PipelineError::MissingParameter("Start Date");
        assert_eq!(err.to_string(), "Missing parameter - Start Date");
    }

    #[test]
    fn service_error_is_verbatim_body() {
        let err = PipelineError::Service("internal error".into());
        assert_eq!(err.to_string(), "internal error");
    }
}
