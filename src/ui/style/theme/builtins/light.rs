use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::types::{Theme, ThemeDefinition};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	subtitle: Style::new().fg(Color::Rgb(71, 85, 105)),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new()
		.bg(Color::Rgb(226, 232, 240))
		.fg(Color::Rgb(30, 64, 175)),
	error: Style::new()
		.fg(Color::Rgb(190, 18, 60))
		.add_modifier(Modifier::BOLD),
	trigger: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(79, 70, 229))
		.add_modifier(Modifier::BOLD),
	link: Style::new()
		.fg(Color::Rgb(3, 105, 161))
		.add_modifier(Modifier::UNDERLINED),
	badge_knowledge: Style::new().fg(Color::Rgb(21, 128, 61)),
	badge_personality: Style::new().fg(Color::Rgb(162, 28, 175)),
	badge_ability: Style::new().fg(Color::Rgb(194, 65, 12)),
	badge_plain: Style::new().fg(Color::Rgb(51, 65, 85)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new("light", LIGHT);
