use ratatui::style::Style;

use crate::classify::DisplayTag;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub subtitle: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub error: Style,
	pub trigger: Style,
	pub link: Style,
	pub badge_knowledge: Style,
	pub badge_personality: Style,
	pub badge_ability: Style,
	pub badge_plain: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn subtitle_style(&self) -> Style {
		self.subtitle
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn link_style(&self) -> Style {
		self.link
	}

	/// Trigger appearance; a disabled trigger borrows the muted empty style.
	#[must_use]
	pub fn trigger_style(&self, enabled: bool) -> Style {
		if enabled { self.trigger } else { self.empty }
	}

	#[must_use]
	pub fn badge_style(&self, tag: DisplayTag) -> Style {
		match tag {
			DisplayTag::Knowledge => self.badge_knowledge,
			DisplayTag::Personality => self.badge_personality,
			DisplayTag::Ability => self.badge_ability,
			DisplayTag::Unclassified => self.badge_plain,
		}
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub(super) fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
