use std::sync::Arc;

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiLabels;
use super::input::QueryInput;
use crate::client::RecommendationClient;
use crate::controller::SearchController;
use crate::present::{ResultsPresentation, TriggerState, present, trigger_state};
use crate::systems::search;
pub use crate::ui::style::Theme;

mod search_runtime;

pub(crate) use search_runtime::SearchRuntime;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Focus {
	#[default]
	Input,
	Results,
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

pub struct App<'a> {
	pub(crate) controller: SearchController,
	pub search_input: QueryInput<'a>,
	pub(crate) list_state: ListState,
	pub(crate) focus: Focus,
	pub(crate) labels: UiLabels,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(super) search: SearchRuntime,
}

impl<'a> App<'a> {
	pub fn new(client: Arc<dyn RecommendationClient>) -> Self {
		Self::with_labels(client, UiLabels::default())
	}

	pub fn with_labels(client: Arc<dyn RecommendationClient>, labels: UiLabels) -> Self {
		let (search_tx, search_rx) = search::spawn(client);
		let theme = Theme::default();
		let mut search_input = QueryInput::new(String::new());
		search_input.set_placeholder(labels.placeholder.clone(), theme.empty_style());

		Self {
			controller: SearchController::new(),
			search_input,
			list_state: ListState::default(),
			focus: Focus::default(),
			labels,
			theme,
			throbber_state: ThrobberState::default(),
			search: SearchRuntime::new(search_tx, search_rx),
		}
	}

	/// Pre-fill the query input.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		let mut search_input = QueryInput::new(query);
		search_input.set_placeholder(self.labels.placeholder.clone(), self.theme.empty_style());
		self.search_input = search_input;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.labels.placeholder.clone(), theme.empty_style());
	}

	#[must_use]
	pub fn controller(&self) -> &SearchController {
		&self.controller
	}

	pub(crate) fn presentation(&self) -> ResultsPresentation {
		present(self.controller.state())
	}

	pub(crate) fn trigger(&self) -> TriggerState {
		trigger_state(self.search_input.text(), self.controller.state())
	}

	pub(crate) fn result_count(&self) -> usize {
		self.controller.state().records().map_or(0, Vec::len)
	}

	/// Keep the card selection inside the current result list.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.result_count();
		if len == 0 {
			self.list_state.select(None);
			self.focus = Focus::Input;
		} else if let Some(selected) = self.list_state.selected() {
			if selected >= len {
				self.list_state.select(Some(len.saturating_sub(1)));
			}
		} else {
			self.list_state.select(Some(0));
		}
	}
}
