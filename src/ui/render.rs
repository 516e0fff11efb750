use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, Paragraph};

use super::App;
use super::components::{
	PromptContext, card_items, error_height, render_empty, render_error, render_prompt,
};
use super::state::Focus;
use crate::present::ResultsBody;

const HINTS_INPUT: &str = "Enter search · Tab results · Esc quit";
const HINTS_RESULTS: &str = "↑/↓ move · Enter open · Tab query · Esc quit";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let presentation = self.presentation();
		let error_rows = presentation
			.error
			.as_deref()
			.map_or(0, |message| error_height(message, area.width));

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(error_rows),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		self.render_header(frame, layout[0], layout[1]);
		render_prompt(
			frame,
			PromptContext {
				input: &self.search_input,
				trigger: self.trigger(),
				throbber_state: &self.throbber_state,
				theme: &self.theme,
				area: layout[3],
			},
		);

		if let Some(message) = &presentation.error {
			render_error(frame, layout[4], message, &self.theme);
		}

		match &presentation.body {
			ResultsBody::Empty => render_empty(frame, layout[5], &self.theme),
			ResultsBody::Cards(cards) => {
				let items = card_items(cards, layout[5].width, &self.theme);
				let mut list = List::new(items);
				if self.focus == Focus::Results {
					list = list
						.highlight_style(self.theme.highlight_style())
						.highlight_symbol("▌");
				}
				frame.render_stateful_widget(list, layout[5], &mut self.list_state);
			}
		}

		self.render_footer(frame, layout[6], presentation.summary.as_deref());
	}

	fn render_header(&self, frame: &mut Frame, title_area: Rect, subtitle_area: Rect) {
		frame.render_widget(
			Paragraph::new(Span::styled(
				self.labels.title.as_str(),
				self.theme.header_style(),
			)),
			title_area,
		);
		frame.render_widget(
			Paragraph::new(Span::styled(
				self.labels.subtitle.as_str(),
				self.theme.subtitle_style(),
			)),
			subtitle_area,
		);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect, summary: Option<&str>) {
		let hints = match self.focus {
			Focus::Input => HINTS_INPUT,
			Focus::Results => HINTS_RESULTS,
		};
		let mut line = Line::default();
		if let Some(summary) = summary {
			line.spans
				.push(Span::styled(summary.to_string(), self.theme.prompt_style()));
			line.spans.push(Span::raw("  "));
		}
		line.spans
			.push(Span::styled(hints, self.theme.empty_style()));
		frame.render_widget(Paragraph::new(line), area);
	}
}
