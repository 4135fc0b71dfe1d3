use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::constants::{STATUS_COMMAND_PALETTE, STATUS_ENTER_ADD, STATUS_REFRESHED};

use super::{App, ConfirmChoice, InputMode};

#[derive(Debug, Clone, Copy)]
pub(crate) enum NormalAction {
    Quit,
    EnterAdd,
    EnterCommand,
    Toggle,
    Delete,
    ShowHelp,
    Refresh,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    SwitchPane,
}

impl NormalAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('a') => Some(Self::EnterAdd),
            KeyCode::Char('/') => Some(Self::EnterCommand),
            KeyCode::Char(' ') | KeyCode::Char('d') | KeyCode::Enter => Some(Self::Toggle),
            KeyCode::Char('x') | KeyCode::Delete => Some(Self::Delete),
            KeyCode::Char('h') => Some(Self::ShowHelp),
            KeyCode::Char('r') => Some(Self::Refresh),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                Some(Self::SwitchPane)
            }
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Add => self.handle_add_mode(key),
            InputMode::Command => self.handle_command_mode(key),
            InputMode::Help => self.handle_help_mode(key),
            InputMode::ConfirmDelete => self.handle_confirm_delete_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        if let Some(action) = NormalAction::from_event(&key) {
            self.execute_normal_action(action);
        }
    }

    fn execute_normal_action(&mut self, action: NormalAction) {
        match action {
            NormalAction::Quit => {
                self.should_quit = true;
            }
            NormalAction::EnterAdd => {
                self.input_mode = InputMode::Add;
                self.input.clear();
                self.set_status_info(STATUS_ENTER_ADD);
            }
            NormalAction::EnterCommand => {
                self.input_mode = InputMode::Command;
                self.input.set("/");
                self.update_command_suggestions();
                self.set_status_info(STATUS_COMMAND_PALETTE);
            }
            NormalAction::Toggle => self.toggle_selected(),
            NormalAction::Delete => self.prompt_delete(),
            NormalAction::ShowHelp => self.show_help_overlay(),
            NormalAction::Refresh => {
                self.refresh();
                self.set_status_info(STATUS_REFRESHED);
            }
            NormalAction::SelectNext => self.select_next(),
            NormalAction::SelectPrev => self.select_prev(),
            NormalAction::SelectFirst => self.select_first(),
            NormalAction::SelectLast => self.select_last(),
            NormalAction::SwitchPane => self.switch_pane(),
        }
    }

    fn handle_add_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.add_item(),
            KeyCode::Esc => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete_char(),
            KeyCode::Char(c) => self.input.insert_char(c),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    fn handle_command_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(s) = self.suggestions.get(self.suggestion_index) {
                    let fill = s.fill.clone();
                    self.input.set(fill.clone());
                    if fill.ends_with(' ') {
                        self.update_command_suggestions();
                    } else {
                        self.run_command();
                    }
                } else {
                    self.run_command();
                }
            }
            KeyCode::Esc => {
                self.input.clear();
                self.input_mode = InputMode::Normal;
                self.status = None;
            }
            KeyCode::Backspace => {
                self.input.backspace();
                self.update_command_suggestions();
            }
            KeyCode::Delete => {
                self.input.delete_char();
                self.update_command_suggestions();
            }
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                self.update_command_suggestions();
            }
            KeyCode::Tab | KeyCode::Right => self.accept_suggestion(),
            KeyCode::Up => {
                if !self.suggestions.is_empty() {
                    if self.suggestion_index == 0 {
                        self.suggestion_index = self.suggestions.len() - 1;
                    } else {
                        self.suggestion_index -= 1;
                    }
                }
            }
            KeyCode::Down => {
                if !self.suggestions.is_empty() {
                    self.suggestion_index = (self.suggestion_index + 1) % self.suggestions.len();
                }
            }
            _ => {}
        }
    }

    fn handle_help_mode(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.input_mode = InputMode::Normal;
            self.status = None;
        }
    }

    fn handle_confirm_delete_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.set_status_info("Deletion cancelled");
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.confirm_choice = self.confirm_choice.toggle();
            }
            KeyCode::Enter => {
                if self.confirm_choice == ConfirmChoice::Yes {
                    self.perform_delete();
                } else {
                    self.set_status_info("Deletion cancelled");
                }
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }
}
