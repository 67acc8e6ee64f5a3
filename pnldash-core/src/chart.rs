//! Chart specifications — renderer-agnostic descriptions of the two
//! dashboard charts.
//!
//! A [`ChartSpec`] names axes, series, colors, the zero-reference line, and
//! (for the PnL chart) a fixed y-axis scale. It owns no state: the pipeline
//! rebuilds both specs on every successful run, and the frontend maps them
//! onto whatever widget it draws with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::{pnl_axis, AxisScale, DerivedSeries};

/// Series color, RGB. The terminal frontend maps this onto its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Original dashboard palette, kept for chart compatibility.
pub const CUMULATIVE_PNL: Rgb = Rgb(44, 44, 61);
pub const TREND: Rgb = Rgb(250, 152, 0);
pub const WIN_COUNT: Rgb = Rgb(15, 183, 25);
pub const LOSS_COUNT: Rgb = Rgb(183, 15, 15);

/// One line series: a name, a color, and one value per date on the shared
/// x-axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub color: Rgb,
    pub values: Vec<f64>,
}

/// A complete chart description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Shared x-axis, date ascending.
    pub dates: Vec<NaiveDate>,
    pub series: Vec<SeriesSpec>,
    /// Fixed y-axis scale; `None` means the renderer auto-scales.
    pub y_axis: Option<AxisScale>,
    /// Horizontal zero-reference line spanning the full date range.
    pub zero_line: bool,
}

/// Chart 1 — "PnL Explain": cumulative PnL with trend overlay, y-axis
/// clamped to the padded range with the computed tick interval.
pub fn pnl_chart(series: &DerivedSeries) -> ChartSpec {
    ChartSpec {
        title: "PnL Explain".into(),
        x_title: "Date".into(),
        y_title: "Cumulative PnL".into(),
        dates: series.dates.clone(),
        series: vec![
            SeriesSpec {
                name: "Cumulative PnL".into(),
                color: CUMULATIVE_PNL,
                values: series.cumulative_profit.clone(),
            },
            SeriesSpec {
                name: "Trend".into(),
                color: TREND,
                values: series.smooth_profit.clone(),
            },
        ],
        y_axis: Some(pnl_axis(&series.cumulative_profit)),
        zero_line: true,
    }
}

/// Chart 2 — "# Won Trades": win and loss counts per period, default
/// auto-scaled y-axis.
pub fn trades_chart(series: &DerivedSeries) -> ChartSpec {
    ChartSpec {
        title: "# Won Trades".into(),
        x_title: "Date".into(),
        y_title: "Win Count".into(),
        dates: series.dates.clone(),
        series: vec![
            SeriesSpec {
                name: "Win Count".into(),
                color: WIN_COUNT,
                values: series.win_counts.iter().map(|&w| w as f64).collect(),
            },
            SeriesSpec {
                name: "Loss Count".into(),
                color: LOSS_COUNT,
                values: series.loss_counts.iter().map(|&l| l as f64).collect(),
            },
        ],
        y_axis: None,
        zero_line: true,
    }
}
