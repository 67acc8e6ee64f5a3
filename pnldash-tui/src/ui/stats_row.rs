//! Stats row — the three summary cells above the charts.
//!
//! On any pipeline failure the display bundle is gone, so all three cells
//! render empty rather than stale numbers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    match app.display.as_ref().map(|b| b.stats) {
        Some(stats) => {
            render_cell(f, cells[0], "PnL: ", format!("{:.2}", stats.final_pnl), theme::pnl(stats.final_pnl));
            render_cell(f, cells[1], "Trades: ", stats.total_trades.to_string(), theme::accent());
            render_cell(f, cells[2], "Percentage Wins: ", format!("{}%", stats.win_pct), theme::accent());
        }
        None => {
            for cell in cells.iter() {
                render_blank(f, *cell);
            }
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, label: &str, value: String, value_style: ratatui::style::Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled(label.to_string(), theme::stat_label()),
        Span::styled(value, value_style),
    ]);
    f.render_widget(Paragraph::new(line).centered(), inner);
}

fn render_blank(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false));
    f.render_widget(block, area);
}
