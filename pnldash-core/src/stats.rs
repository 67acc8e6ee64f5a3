//! Stat summarization — the three scalar display values next to the charts.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::series::DerivedSeries;

/// The three labeled summary statistics for the selected window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    /// Final cumulative PnL (last point of the window).
    pub final_pnl: f64,
    /// Wins plus losses over the window.
    pub total_trades: u64,
    /// Win ratio × 100, rounded to the nearest integer.
    pub win_pct: i64,
}

impl StatSummary {
    pub fn pnl_text(&self) -> String {
        format!("PnL: {:.2}", self.final_pnl)
    }

    pub fn trades_text(&self) -> String {
        format!("Trades: {}", self.total_trades)
    }

    pub fn wins_text(&self) -> String {
        format!("Percentage Wins: {}%", self.win_pct)
    }
}

/// Compute the summary from a derived series.
///
/// Zero trades in the window is a defined error state, not a NaN display.
pub fn summarize(series: &DerivedSeries) -> Result<StatSummary, PipelineError> {
    let ratio = series.win_ratio()?;
    Ok(StatSummary {
        final_pnl: series.final_pnl(),
        total_trades: series.total_trades(),
        win_pct: (ratio * 100.0).round() as i64,
    })
}
