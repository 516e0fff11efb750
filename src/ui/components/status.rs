use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use super::cards::wrap_text;
use crate::present::{EMPTY_HINT, EMPTY_TITLE};
use crate::ui::style::Theme;

/// Centered placeholder for an empty results area.
pub fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let top_padding = area.height.saturating_sub(2) / 2;
	let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::default()).collect();
	lines.push(Line::from(Span::styled(EMPTY_TITLE, theme.header_style())));
	lines.push(Line::from(Span::styled(EMPTY_HINT, theme.empty_style())));

	frame.render_widget(Clear, area);
	frame.render_widget(
		Paragraph::new(lines)
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true }),
		area,
	);
}

/// Most rows the error banner may take from the results area.
pub const MAX_ERROR_ROWS: u16 = 4;

fn banner_text(message: &str) -> String {
	format!("⚠ {message}")
}

/// Rows needed to show `message` wrapped to `width`, capped at [`MAX_ERROR_ROWS`].
pub fn error_height(message: &str, width: u16) -> u16 {
	let rows = wrap_text(&banner_text(message), usize::from(width)).len();
	u16::try_from(rows)
		.unwrap_or(MAX_ERROR_ROWS)
		.clamp(1, MAX_ERROR_ROWS)
}

/// Error banner, wrapped over as many rows as `area` provides.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let banner = Paragraph::new(Line::from(Span::styled(
		banner_text(message),
		theme.error_style(),
	)))
	.wrap(Wrap { trim: true });
	frame.render_widget(banner, area);
}
