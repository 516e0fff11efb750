mod builtins;
mod types;

pub use builtins::{BUILT_IN_DEFINITIONS, default_theme};
pub use types::{Theme, ThemeDefinition};

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

/// Names of all built-in themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
