use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::present::TriggerState;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

const PROMPT: &str = "› ";

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub trigger: TriggerState,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
	pub area: Rect,
}

/// Render the query input with the submit trigger on the right.
pub fn render_prompt(frame: &mut Frame, ctx: PromptContext<'_>) {
	let PromptContext {
		input,
		trigger,
		throbber_state,
		theme,
		area,
	} = ctx;

	let trigger_line = trigger_line(trigger, throbber_state, theme);
	let trigger_width = u16::try_from(trigger_line.width()).unwrap_or(u16::MAX);
	let prompt_width = u16::try_from(PROMPT.width()).unwrap_or(2);

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(trigger_width.saturating_add(1)),
		])
		.split(area);

	frame.render_widget(
		Paragraph::new(PROMPT).style(theme.prompt_style()),
		columns[0],
	);
	input.render(frame, columns[1]);
	frame.render_widget(
		Paragraph::new(trigger_line).alignment(ratatui::layout::Alignment::Right),
		columns[2],
	);
}

/// Trigger label, prefixed by a spinner while a request is in flight.
pub fn trigger_line(
	trigger: TriggerState,
	throbber_state: &ThrobberState,
	theme: &Theme,
) -> Line<'static> {
	let style = theme.trigger_style(trigger.is_enabled() || trigger == TriggerState::Busy);
	let mut line = Line::default();
	if trigger == TriggerState::Busy {
		let spinner = Throbber::default().style(style).throbber_style(style);
		let symbol = spinner.to_symbol_span(throbber_state);
		line.spans
			.push(Span::styled(symbol.content.into_owned(), symbol.style));
	}
	line.spans
		.push(Span::styled(format!("[ {} ]", trigger.label()), style));
	line
}
