//! Style tokens for the dashboard.
//!
//! Series colors come from the chart specs (the core carries the original
//! dashboard palette); everything else here is chrome.

use pnldash_core::Rgb;
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGray;
pub const WARNING: Color = Color::Yellow;
pub const NEGATIVE: Color = Color::Red;
pub const POSITIVE: Color = Color::Green;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn stat_label() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// PnL coloring for the stat cells.
pub fn pnl(value: f64) -> Style {
    if value >= 0.0 {
        Style::default().fg(POSITIVE)
    } else {
        Style::default().fg(NEGATIVE)
    }
}

/// Map a chart-spec color onto the terminal palette.
pub fn series_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_style_tracks_sign() {
        assert_eq!(pnl(5.0).fg, Some(POSITIVE));
        assert_eq!(pnl(-5.0).fg, Some(NEGATIVE));
        assert_eq!(pnl(0.0).fg, Some(POSITIVE));
    }

    #[test]
    fn series_color_passes_rgb_through() {
        assert_eq!(series_color(Rgb(250, 152, 0)), Color::Rgb(250, 152, 0));
    }
}
