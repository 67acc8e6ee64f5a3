//! Chart rendering — maps a renderer-agnostic `ChartSpec` onto a ratatui
//! line chart.
//!
//! The PnL chart carries a fixed axis scale (padded bounds + tick spacing)
//! which is honored here; the trades chart auto-scales with 5% padding. The
//! zero-reference line renders as its own two-point dataset.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use pnldash_core::ChartSpec;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, fallback_title: &str, spec: Option<&ChartSpec>) {
    let title = spec.map(|s| s.title.as_str()).unwrap_or(fallback_title);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(spec.is_some()))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(spec.is_some()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match spec {
        Some(spec) if !spec.dates.is_empty() => render_chart(f, inner, spec),
        _ => render_empty(f, inner),
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No report loaded.",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "Fill the inputs and press Enter.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_chart(f: &mut Frame, area: Rect, spec: &ChartSpec) {
    let x_max = spec.dates.len().saturating_sub(1) as f64;

    // Materialize all point vectors first; datasets borrow them.
    let mut point_sets: Vec<Vec<(f64, f64)>> = spec
        .series
        .iter()
        .map(|s| {
            s.values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect()
        })
        .collect();

    if spec.zero_line {
        point_sets.push(vec![(0.0, 0.0), (x_max.max(1.0), 0.0)]);
    }

    let (y_min, y_max) = y_bounds(spec);

    let mut datasets: Vec<Dataset> = spec
        .series
        .iter()
        .zip(point_sets.iter())
        .map(|(s, points)| {
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(theme::series_color(s.color)))
                .graph_type(GraphType::Line)
                .data(points)
        })
        .collect();

    if spec.zero_line {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .style(theme::muted())
                .graph_type(GraphType::Line)
                .data(point_sets.last().expect("zero line points exist")),
        );
    }

    let first_date = spec.dates.first().map(|d| d.to_string()).unwrap_or_default();
    let last_date = spec.dates.last().map(|d| d.to_string()).unwrap_or_default();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled(spec.x_title.clone(), theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first_date, theme::muted()),
                    Span::styled(last_date, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(spec.y_title.clone(), theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(
                    y_labels(spec, y_min, y_max)
                        .into_iter()
                        .map(|l| Span::styled(l, theme::muted()))
                        .collect::<Vec<_>>(),
                ),
        );

    f.render_widget(chart, area);
}

/// Y bounds: the fixed axis scale when present, otherwise data min/max with
/// 5% padding. Degenerate (flat) ranges get a unit of headroom so the chart
/// still has a visible band.
fn y_bounds(spec: &ChartSpec) -> (f64, f64) {
    let (min, max) = match spec.y_axis {
        Some(axis) => (axis.min, axis.max),
        None => {
            let values = spec.series.iter().flat_map(|s| s.values.iter().copied());
            let min = values.clone().fold(f64::INFINITY, f64::min);
            let max = values.fold(f64::NEG_INFINITY, f64::max);
            let padding = (max - min).abs() * 0.05;
            (min - padding, max + padding)
        }
    };
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// Tick-spaced labels when the spec carries a usable tick interval, bound
/// labels otherwise. A zero tick (narrow ranges) falls back to bounds.
fn y_labels(spec: &ChartSpec, y_min: f64, y_max: f64) -> Vec<String> {
    if let Some(axis) = spec.y_axis {
        if axis.tick > 0 {
            let steps = ((y_max - y_min) / axis.tick as f64).floor() as usize;
            if (1..=12).contains(&steps) {
                return (0..=steps)
                    .map(|i| format!("{:.0}", y_min + (i as i64 * axis.tick) as f64))
                    .collect();
            }
        }
    }
    vec![
        format!("{y_min:.0}"),
        format!("{:.0}", (y_min + y_max) / 2.0),
        format!("{y_max:.0}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnldash_core::{AxisScale, Rgb, SeriesSpec};

    fn spec(y_axis: Option<AxisScale>, values: Vec<f64>) -> ChartSpec {
        ChartSpec {
            title: "t".into(),
            x_title: "Date".into(),
            y_title: "y".into(),
            dates: values
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    chrono::NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap()
                })
                .collect(),
            series: vec![SeriesSpec {
                name: "s".into(),
                color: Rgb(1, 2, 3),
                values,
            }],
            y_axis,
            zero_line: true,
        }
    }

    #[test]
    fn fixed_axis_bounds_are_honored() {
        let s = spec(
            Some(AxisScale {
                min: 40.0,
                max: 120.0,
                tick: 20,
            }),
            vec![50.0, 100.0],
        );
        assert_eq!(y_bounds(&s), (40.0, 120.0));
        assert_eq!(y_labels(&s, 40.0, 120.0), vec!["40", "60", "80", "100", "120"]);
    }

    #[test]
    fn zero_tick_falls_back_to_bound_labels() {
        let s = spec(
            Some(AxisScale {
                min: 0.8,
                max: 2.4,
                tick: 0,
            }),
            vec![1.0, 2.0],
        );
        assert_eq!(y_labels(&s, 0.8, 2.4).len(), 3);
    }

    #[test]
    fn auto_axis_pads_the_data_range() {
        let s = spec(None, vec![0.0, 10.0]);
        let (min, max) = y_bounds(&s);
        assert!(min < 0.0);
        assert!(max > 10.0);
    }

    #[test]
    fn flat_series_still_gets_a_band() {
        let s = spec(None, vec![3.0, 3.0]);
        let (min, max) = y_bounds(&s);
        assert!(max > min);
    }
}
