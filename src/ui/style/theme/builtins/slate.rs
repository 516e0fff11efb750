use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	subtitle: Style::new().fg(Color::Rgb(148, 163, 184)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	error: Style::new()
		.fg(Color::Rgb(255, 179, 193))
		.add_modifier(Modifier::BOLD),
	trigger: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(129, 140, 248))
		.add_modifier(Modifier::BOLD),
	link: Style::new()
		.fg(Color::Rgb(125, 211, 252))
		.add_modifier(Modifier::UNDERLINED),
	badge_knowledge: Style::new().fg(Color::Rgb(134, 239, 172)),
	badge_personality: Style::new().fg(Color::Rgb(240, 147, 251)),
	badge_ability: Style::new().fg(Color::Rgb(253, 186, 116)),
	badge_plain: Style::new().fg(Color::Rgb(203, 213, 225)),
};

pub const DEFINITION: ThemeDefinition =
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]);
