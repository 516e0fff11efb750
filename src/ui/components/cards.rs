use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::present::{AssessmentCard, VIEW_DETAILS_LABEL};
use crate::ui::style::Theme;

const INDENT: &str = "  ";

/// Build one list item per card, each wrapped to `width` columns.
pub fn card_items(cards: &[AssessmentCard], width: u16, theme: &Theme) -> Vec<ListItem<'static>> {
	cards
		.iter()
		.map(|card| ListItem::new(card_lines(card, width, theme)))
		.collect()
}

pub fn card_lines(card: &AssessmentCard, width: u16, theme: &Theme) -> Vec<Line<'static>> {
	let body_width = usize::from(width).saturating_sub(INDENT.width()).max(1);
	let mut lines = vec![Line::from(Span::styled(
		card.name.clone(),
		theme.header_style().add_modifier(Modifier::BOLD),
	))];

	if !card.badges.is_empty() {
		let mut badges = Line::from(Span::raw(INDENT));
		for (index, badge) in card.badges.iter().enumerate() {
			if index > 0 {
				badges.spans.push(Span::raw(" "));
			}
			badges.spans.push(Span::styled(
				format!("[{}]", badge.label),
				theme.badge_style(badge.tag),
			));
		}
		lines.push(badges);
	}

	for row in wrap_text(&card.description, body_width) {
		lines.push(Line::from(vec![Span::raw(INDENT), Span::raw(row)]));
	}

	let meta: Vec<&str> = [&card.duration, &card.adaptive, &card.remote]
		.into_iter()
		.filter_map(|value| value.as_deref())
		.collect();
	if !meta.is_empty() {
		lines.push(Line::from(vec![
			Span::raw(INDENT),
			Span::styled(meta.join(" · "), theme.subtitle_style()),
		]));
	}

	if let Some(link) = &card.link {
		lines.push(Line::from(vec![
			Span::raw(INDENT),
			Span::styled(VIEW_DETAILS_LABEL, theme.link_style()),
			Span::raw(" "),
			Span::styled(link.clone(), theme.link_style().add_modifier(Modifier::UNDERLINED)),
		]));
	}

	lines.push(Line::from(Span::styled(String::new(), Style::default())));
	lines
}

/// Greedy word wrap measured in terminal columns.
///
/// Words wider than `width` are split at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut rows = Vec::new();
	let mut current = String::new();
	let mut current_width = 0;

	for word in text.split_whitespace() {
		let word_width = word.width();
		let gap = usize::from(!current.is_empty());

		if current_width + gap + word_width <= width {
			if gap == 1 {
				current.push(' ');
			}
			current.push_str(word);
			current_width += gap + word_width;
			continue;
		}

		if !current.is_empty() {
			rows.push(std::mem::take(&mut current));
			current_width = 0;
		}

		if word_width <= width {
			current.push_str(word);
			current_width = word_width;
			continue;
		}

		for ch in word.chars() {
			let ch_width = ch.width().unwrap_or(0);
			if current_width + ch_width > width && !current.is_empty() {
				rows.push(std::mem::take(&mut current));
				current_width = 0;
			}
			current.push(ch);
			current_width += ch_width;
		}
	}

	if !current.is_empty() {
		rows.push(current);
	}
	rows
}
