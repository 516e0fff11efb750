use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::Focus;
use crate::types::{AssessmentRecord, SearchOutcome};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		match key.code {
			KeyCode::Esc => {
				return Ok(Some(SearchOutcome {
					accepted: false,
					selection: None,
					query: self.search_input.text().to_string(),
				}));
			}
			KeyCode::Enter => {
				if !is_plain_enter(key) {
					return Ok(None);
				}
				match self.focus {
					Focus::Input => self.request_search(),
					Focus::Results => {
						if let Some(selection) = self.current_selection() {
							return Ok(Some(SearchOutcome {
								accepted: true,
								selection: Some(selection),
								query: self.search_input.text().to_string(),
							}));
						}
					}
				}
			}
			KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.controller.is_loading() {
					return Ok(None);
				}
				self.focus = Focus::Input;
				self.search_input.input(key);
			}
		}
		Ok(None)
	}

	fn toggle_focus(&mut self) {
		self.focus = match self.focus {
			Focus::Input if self.result_count() > 0 => {
				self.ensure_selection();
				Focus::Results
			}
			_ => Focus::Input,
		};
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		match self.list_state.selected() {
			Some(selected) if selected + 1 < self.result_count() => {
				self.list_state.select(Some(selected + 1));
			}
			None if self.result_count() > 0 => self.list_state.select(Some(0)),
			_ => {}
		}
	}

	pub(crate) fn current_selection(&self) -> Option<AssessmentRecord> {
		let selected = self.list_state.selected()?;
		self.controller.state().records()?.get(selected).cloned()
	}
}

/// Enter submits only without Shift, Alt or Control held.
fn is_plain_enter(key: KeyEvent) -> bool {
	!key.modifiers
		.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::CONTROL)
}
