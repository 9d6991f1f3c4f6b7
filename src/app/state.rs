//! Application state definitions
//!
//! `AppState` is everything the renderer reads. It is mutated only in
//! response to key events and the result of the action they trigger.

use crate::actions::{SetupAction, StatusMessage};

/// Main application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Menu entries, fixed for the process lifetime
    pub items: Vec<SetupAction>,
    /// Index into `items`; always in bounds
    pub selected: usize,
    /// Set once the user asked to leave; the loop exits before the next read
    pub quitting: bool,
    /// Outcome of the most recent action
    pub last_message: Option<StatusMessage>,
    /// Whether the help overlay is open
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SetupAction::all())
    }
}

impl AppState {
    pub fn new(items: Vec<SetupAction>) -> Self {
        Self {
            items,
            selected: 0,
            quitting: false,
            last_message: None,
            help_visible: false,
        }
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// The action under the cursor
    pub fn selected_action(&self) -> Option<SetupAction> {
        self.items.get(self.selected).copied()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.last_index());
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn page_down(&mut self, page: usize) {
        self.selected = self.selected.saturating_add(page).min(self.last_index());
    }

    pub fn move_to_first(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_last(&mut self) {
        self.selected = self.last_index();
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}
