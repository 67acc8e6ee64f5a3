//! Top-level UI layout — stats row, input form, two stacked charts, status
//! bar.

pub mod chart_panel;
pub mod form_panel;
pub mod stats_row;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::AppState;

/// Draw the entire dashboard.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: stats row + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    stats_row::render(f, chunks[0], app);

    // Main area: inputs on the left, charts stacked on the right.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    form_panel::render(f, columns[0], app);

    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let bundle = app.display.as_ref();
    chart_panel::render(f, charts[0], "PnL Explain", bundle.map(|b| &b.pnl_chart));
    chart_panel::render(f, charts[1], "# Won Trades", bundle.map(|b| &b.trades_chart));

    status_bar::render(f, chunks[2], app);
}
