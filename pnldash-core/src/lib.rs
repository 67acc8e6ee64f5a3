//! PnL Dash Core — the report-transform-and-chart pipeline.
//!
//! One synchronous pipeline bounded by a UI event:
//! - Query validation (presence checks in fixed priority order)
//! - Report client (form-encoded POST, JSON row parsing)
//! - Series derivation (last-K window, cumulative sum, 3-point trend)
//! - Chart specifications (renderer-agnostic, recomputed every run)
//! - Stat summarization (final PnL, trade count, win percentage)
//!
//! Nothing here owns long-lived state: every run recomputes everything from
//! the fetched response.

pub mod chart;
pub mod client;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod series;
pub mod stats;

pub use chart::{ChartSpec, Rgb, SeriesSpec};
pub use client::{HttpReportClient, ReportRow, ReportSource};
pub use error::PipelineError;
pub use pipeline::{RenderBundle, SUCCESS_STATUS};
pub use query::{QueryInput, ReportQuery};
pub use series::{AxisScale, DerivedSeries, Timeframe};
pub use stats::StatSummary;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline products cross the worker channel,
    /// so they must be Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<ReportRow>();
        require_sync::<ReportRow>();
        require_send::<ReportQuery>();
        require_sync::<ReportQuery>();
        require_send::<DerivedSeries>();
        require_sync::<DerivedSeries>();
        require_send::<ChartSpec>();
        require_sync::<ChartSpec>();
        require_send::<StatSummary>();
        require_sync::<StatSummary>();
        require_send::<RenderBundle>();
        require_sync::<RenderBundle>();
        require_send::<PipelineError>();
        require_sync::<PipelineError>();
    }
}
