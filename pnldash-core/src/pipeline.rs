//! The one-shot pipeline: validate → fetch → transform → chart → summarize.
//!
//! [`run`] is the synchronous end-to-end path, callable without a live UI.
//! The dashboard splits the same flow across its worker thread (fetch) and
//! main thread (everything else) but goes through the identical pieces.

use crate::chart::{pnl_chart, trades_chart, ChartSpec};
use crate::client::{ReportRow, ReportSource};
use crate::error::PipelineError;
use crate::query::{self, QueryInput};
use crate::series::{DerivedSeries, Timeframe};
use crate::stats::{summarize, StatSummary};

/// Status line shown after a successful run.
pub const SUCCESS_STATUS: &str = "Status: Success!";

/// Everything one successful run produces for the display surface.
#[derive(Debug, Clone)]
pub struct RenderBundle {
    pub pnl_chart: ChartSpec,
    pub trades_chart: ChartSpec,
    pub stats: StatSummary,
}

/// Transform fetched rows into the display bundle.
///
/// Fails with `NoData` on an empty window and `NoTrades` when the window
/// has rows but zero trades; either way the caller clears its display.
pub fn render_rows(rows: &[ReportRow], timeframe: Timeframe) -> Result<RenderBundle, PipelineError> {
    let series = DerivedSeries::derive(rows, timeframe)?;
    Ok(RenderBundle {
        pnl_chart: pnl_chart(&series),
        trades_chart: trades_chart(&series),
        stats: summarize(&series)?,
    })
}

/// Run the full pipeline against a report source.
///
/// Validation failures abort before any fetch; fetch failures abort before
/// any transform.
pub fn run(
    source: &dyn ReportSource,
    input: &QueryInput,
    timeframe: Timeframe,
) -> Result<RenderBundle, PipelineError> {
    let query = query::build(input)?;
    let rows = source.fetch(&query)?;
    render_rows(&rows, timeframe)
}
