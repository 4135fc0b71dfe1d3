use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};
use ratatui::widgets::ListState;

use super::buffer::TextBuffer;
use super::constants::*;
use crate::model::Item;
use crate::store::ItemStore;

mod commands;
mod input;
mod render;
#[cfg(test)]
mod tests;

use commands::Suggestion;

/// Which of the two lists currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Pending,
    Completed,
}

impl Pane {
    fn other(self) -> Self {
        match self {
            Pane::Pending => Pane::Completed,
            Pane::Completed => Pane::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Add,
    Command,
    Help,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    fn toggle(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            StatusKind::Info => Style::default().fg(Color::Cyan),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusKind {
    Info,
    Error,
}

pub(crate) struct App {
    store: ItemStore,
    pending: Vec<Item>,
    completed: Vec<Item>,
    pane: Pane,
    selected: usize,
    pending_state: ListState,
    completed_state: ListState,
    input_mode: InputMode,
    input: TextBuffer,
    suggestions: Vec<Suggestion>,
    suggestion_index: usize,
    status: Option<StatusMessage>,
    confirm_choice: ConfirmChoice,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(store: ItemStore) -> Self {
        let mut app = Self {
            store,
            pending: Vec::new(),
            completed: Vec::new(),
            pane: Pane::Pending,
            selected: 0,
            pending_state: ListState::default(),
            completed_state: ListState::default(),
            input_mode: InputMode::Normal,
            input: TextBuffer::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            status: None,
            confirm_choice: ConfirmChoice::No,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Re-derive both projections from the store and clamp the selection.
    /// Called after every mutation so the panes can never go stale.
    pub(crate) fn refresh(&mut self) {
        self.pending = self.store.pending();
        self.completed = self.store.completed();

        let len = self.active_items().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
        self.sync_list_states();
    }

    fn sync_list_states(&mut self) {
        let selection = if self.active_items().is_empty() {
            None
        } else {
            Some(self.selected)
        };
        match self.pane {
            Pane::Pending => {
                self.pending_state.select(selection);
                self.completed_state.select(None);
            }
            Pane::Completed => {
                self.completed_state.select(selection);
                self.pending_state.select(None);
            }
        }
    }

    fn active_items(&self) -> &[Item] {
        match self.pane {
            Pane::Pending => &self.pending,
            Pane::Completed => &self.completed,
        }
    }

    fn selected_item(&self) -> Option<&Item> {
        self.active_items().get(self.selected)
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > Duration::from_secs(5) {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn select_next(&mut self) {
        if self.active_items().is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.active_items().len() - 1);
        self.sync_list_states();
    }

    fn select_prev(&mut self) {
        if self.active_items().is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.sync_list_states();
    }

    fn select_first(&mut self) {
        if !self.active_items().is_empty() {
            self.selected = 0;
            self.sync_list_states();
        }
    }

    fn select_last(&mut self) {
        if !self.active_items().is_empty() {
            self.selected = self.active_items().len() - 1;
            self.sync_list_states();
        }
    }

    fn switch_pane(&mut self) {
        self.pane = self.pane.other();
        self.selected = 0;
        self.sync_list_states();
    }

    /// Submit the add buffer to the store. The store is the authority on
    /// blank titles: when it rejects, the overlay stays open and nothing
    /// changes.
    fn add_item(&mut self) {
        let Some(outcome) = self.store.add(self.input.as_str()) else {
            return;
        };

        self.set_status_info(format!("Added '{}' ➕", outcome.title));
        self.input.clear();
        self.input_mode = InputMode::Normal;
        self.refresh();
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            self.set_status_info("Nothing to toggle");
            return;
        };
        self.toggle_by_id(id);
    }

    fn toggle_by_id(&mut self, id: u64) {
        let outcome = self.store.toggle(id);
        if !outcome.changed {
            self.set_status_info("Item not found");
            return;
        }

        let message = match self.store.get(id) {
            Some(item) if item.done => format!("Marked '{}' done ✅", item.title),
            Some(item) => format!("Moved '{}' back to To do", item.title),
            None => String::from("Toggled item"),
        };
        self.set_status_info(message);
        self.refresh();
    }

    fn prompt_delete(&mut self) {
        if self.selected_item().is_none() {
            self.set_status_info("Nothing to delete");
            return;
        }
        self.confirm_choice = ConfirmChoice::No;
        self.input_mode = InputMode::ConfirmDelete;
        self.set_status_info(STATUS_CONFIRM_DELETE);
    }

    fn perform_delete(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            self.set_status_info("Nothing to delete");
            return;
        };
        self.delete_by_id(id);
    }

    fn delete_by_id(&mut self, id: u64) {
        let outcome = self.store.delete(id);
        if outcome.deleted {
            self.set_status_info("Deleted item 🗑️");
        } else {
            self.set_status_info("Item not found");
        }
        self.refresh();
    }

    fn show_help_overlay(&mut self) {
        self.input_mode = InputMode::Help;
        self.set_status_info(STATUS_HELP);
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("ℹ️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Info));
    }

    pub(crate) fn set_status_error<T: Into<String>>(&mut self, message: T) {
        let mut text = String::from("⚠️  ");
        text.push_str(&message.into());
        self.status = Some(StatusMessage::new(text, StatusKind::Error));
    }
}
