mod light;
mod slate;

use super::types::{Theme, ThemeDefinition};

pub const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[slate::DEFINITION, light::DEFINITION];

#[must_use]
pub fn default_theme() -> Theme {
	slate::SLATE
}
