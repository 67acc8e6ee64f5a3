//! Input form — timeframe selector plus the five report parameters.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, FormRow};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Inputs ")
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::with_capacity(FormRow::ALL.len() * 2 + 2);
    lines.push(Line::from(""));

    for row in FormRow::ALL {
        let active = app.form.cursor == row;
        let marker = if active { "> " } else { "  " };
        let label_style = if active { theme::accent() } else { theme::muted() };

        let value_text = match row {
            FormRow::Timeframe => format!("< {} >", app.timeframe.label()),
            _ => {
                let value = app.form.value(row).unwrap_or_default();
                if value.is_empty() && !active {
                    format!("({})", row.label().to_lowercase())
                } else if active {
                    format!("{value}_")
                } else {
                    value.to_string()
                }
            }
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<10} ", row.label()), label_style),
            Span::raw(value_text),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter to submit",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
