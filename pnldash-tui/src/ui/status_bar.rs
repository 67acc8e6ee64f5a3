//! Bottom status bar — key hints, pipeline phase, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " Tab:Next field  \u{2190}\u{2192}:Timeframe  Enter:Submit  Esc:Quit",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.phase.label(), theme::muted()));

    if let Some((msg, level)) = &app.status {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
