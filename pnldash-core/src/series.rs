//! Series derivation — pure functions that turn report rows into the
//! windowed time series the charts and stats consume.
//!
//! Everything here is recomputed per run from the fetched rows. Row order
//! is trusted as delivered (date ascending); it drives both the cumulative
//! sum and the last-K windowing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::ReportRow;
use crate::error::PipelineError;

/// How many most-recent report rows a render includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Week
    }
}

impl Timeframe {
    /// Window size in rows.
    pub fn window(self) -> usize {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Week => "Last 7 Days",
            Timeframe::Month => "Last 30 Days",
            Timeframe::Quarter => "Last 90 Days",
        }
    }

    pub fn next(self) -> Timeframe {
        match self {
            Timeframe::Week => Timeframe::Month,
            Timeframe::Month => Timeframe::Quarter,
            Timeframe::Quarter => Timeframe::Week,
        }
    }

    pub fn prev(self) -> Timeframe {
        match self {
            Timeframe::Week => Timeframe::Quarter,
            Timeframe::Month => Timeframe::Week,
            Timeframe::Quarter => Timeframe::Month,
        }
    }
}

/// Y-axis range and tick spacing for the cumulative-PnL chart.
///
/// Produced by [`pnl_axis`]; the padding and tick rounding are reproduced
/// exactly for compatibility with the prior chart appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    /// Tick spacing, rounded to the nearest multiple of 10. May be 0 for
    /// narrow ranges; renderers fall back to bound labels in that case.
    pub tick: i64,
}

/// Derived time series over the selected window. Non-empty by construction:
/// [`DerivedSeries::derive`] rejects empty windows with
/// [`PipelineError::NoData`].
#[derive(Debug, Clone)]
pub struct DerivedSeries {
    pub dates: Vec<NaiveDate>,
    /// Running prefix sum of `profit_total` within the window.
    pub cumulative_profit: Vec<f64>,
    /// Trailing mean of `cumulative_profit` over at most 3 points.
    pub smooth_profit: Vec<f64>,
    pub win_counts: Vec<u32>,
    pub loss_counts: Vec<u32>,
}

impl DerivedSeries {
    /// Window the rows to the last K and compute the derived series.
    pub fn derive(rows: &[ReportRow], timeframe: Timeframe) -> Result<Self, PipelineError> {
        let k = timeframe.window();
        let start = rows.len().saturating_sub(k);
        let window = &rows[start..];

        if window.is_empty() {
            return Err(PipelineError::NoData);
        }

        let mut cumulative_profit = Vec::with_capacity(window.len());
        let mut running = 0.0;
        for row in window {
            running += row.profit_total;
            cumulative_profit.push(running);
        }

        let smooth_profit = trailing_mean(&cumulative_profit, 3);

        Ok(Self {
            dates: window.iter().map(|r| r.date).collect(),
            cumulative_profit,
            smooth_profit,
            win_counts: window.iter().map(|r| r.win_count).collect(),
            loss_counts: window.iter().map(|r| r.loss_count).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn total_wins(&self) -> u64 {
        self.win_counts.iter().map(|&w| w as u64).sum()
    }

    pub fn total_losses(&self) -> u64 {
        self.loss_counts.iter().map(|&l| l as u64).sum()
    }

    pub fn total_trades(&self) -> u64 {
        self.total_wins() + self.total_losses()
    }

    /// Fraction of total trades that were wins.
    ///
    /// Zero trades make the ratio undefined; callers get a structured error
    /// instead of NaN.
    pub fn win_ratio(&self) -> Result<f64, PipelineError> {
        let total = self.total_trades();
        if total == 0 {
            return Err(PipelineError::NoTrades);
        }
        Ok(self.total_wins() as f64 / total as f64)
    }

    /// Final cumulative PnL (last point of the window).
    pub fn final_pnl(&self) -> f64 {
        *self.cumulative_profit.last().unwrap_or(&0.0)
    }
}

/// Trailing moving average with partial windows at the start: the mean is
/// taken over however many of the last `window` points exist at each index.
fn trailing_mean(values: &[f64], window: usize) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = i.saturating_sub(window - 1);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Y-axis range heuristic for the cumulative-PnL chart.
///
/// Asymmetric padding (0.8 below / 1.2 above, flipped for negative bounds)
/// and a tick interval rounded to the nearest multiple of 10. This is an
/// ad-hoc heuristic kept verbatim for chart compatibility, not a general
/// axis-scaling algorithm.
pub fn pnl_axis(cumulative_profit: &[f64]) -> AxisScale {
    let mx = cumulative_profit
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let mn = cumulative_profit.iter().copied().fold(f64::INFINITY, f64::min);

    let min = if mn > 0.0 { mn * 0.8 } else { mn * 1.2 };
    let max = if mx > 0.0 { mx * 1.2 } else { mx * 0.8 };

    let tick_interval = (max - min) / 5.0;
    let tick = ((tick_interval / 10.0).round() * 10.0) as i64;

    AxisScale { min, max, tick }
}
