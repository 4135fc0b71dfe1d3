use crate::tui::constants::COMMAND_HELP;

use super::App;

#[derive(Debug, Clone)]
pub(crate) struct Suggestion {
    pub(crate) fill: String,
    pub(crate) label: String,
}

impl App {
    pub(crate) fn run_command(&mut self) {
        let raw = self.input.as_str().trim();
        if !raw.starts_with('/') {
            self.set_status_error("Commands must start with '/'");
            return;
        }
        let mut parts = raw[1..].split_whitespace();
        let cmd = match parts.next() {
            Some(c) => c.to_ascii_lowercase(),
            None => {
                self.set_status_error("Enter a command after '/'");
                return;
            }
        };

        match cmd.as_str() {
            "help" | "h" => {
                self.set_status_info(COMMAND_HELP);
            }
            "add" => {
                let rest: Vec<&str> = parts.collect();
                if rest.is_empty() {
                    self.set_status_error("Usage: /add <title>");
                } else {
                    self.input.set(rest.join(" "));
                    self.add_item();
                    return;
                }
            }
            "toggle" | "t" => match parse_id_argument(parts.next()) {
                IdArgument::Id(id) => {
                    self.toggle_by_id(id);
                }
                IdArgument::Selected => self.toggle_selected(),
                IdArgument::Invalid(raw) => {
                    self.set_status_error(format!("'{}' is not an item id", raw));
                }
            },
            "delete" | "del" | "rm" => match parse_id_argument(parts.next()) {
                IdArgument::Id(id) => {
                    self.delete_by_id(id);
                }
                IdArgument::Selected => {
                    self.finish_command();
                    self.prompt_delete();
                    return;
                }
                IdArgument::Invalid(raw) => {
                    self.set_status_error(format!("'{}' is not an item id", raw));
                }
            },
            "refresh" | "r" => {
                self.refresh();
                self.set_status_info("Refreshed lists");
            }
            "quit" | "q" | "exit" => {
                self.should_quit = true;
            }
            unknown => {
                self.set_status_error(format!("Unknown command: {} (try /help)", unknown));
            }
        }

        self.finish_command();
    }

    pub(crate) fn finish_command(&mut self) {
        self.input.clear();
        self.input_mode = super::InputMode::Normal;
    }

    pub(crate) fn update_command_suggestions(&mut self) {
        self.suggestions = build_command_suggestions(self);
        if self.suggestion_index >= self.suggestions.len() {
            self.suggestion_index = 0;
        }
    }

    pub(crate) fn accept_suggestion(&mut self) {
        if let Some(s) = self.suggestions.get(self.suggestion_index) {
            self.input.set(s.fill.clone());
            self.update_command_suggestions();
        }
    }
}

enum IdArgument {
    Id(u64),
    Selected,
    Invalid(String),
}

fn parse_id_argument(token: Option<&str>) -> IdArgument {
    match token {
        None => IdArgument::Selected,
        Some(raw) => match raw.parse::<u64>() {
            Ok(id) => IdArgument::Id(id),
            Err(_) => IdArgument::Invalid(raw.to_string()),
        },
    }
}

fn build_command_suggestions(app: &App) -> Vec<Suggestion> {
    let raw = app.input.as_str();
    if !raw.starts_with('/') {
        return Vec::new();
    }
    let without = raw[1..].trim_start();
    let mut tokens = without.split_whitespace();
    let first = tokens.next().unwrap_or("").to_ascii_lowercase();
    let rest = tokens.collect::<Vec<_>>().join(" ");

    let mut base: Vec<Suggestion> = vec![
        Suggestion {
            fill: String::from("/help"),
            label: String::from("❓ Help — show available commands"),
        },
        Suggestion {
            fill: String::from("/add "),
            label: String::from("➕ Add a new item"),
        },
        Suggestion {
            fill: String::from("/toggle "),
            label: String::from("✅ Toggle selected (or id)"),
        },
        Suggestion {
            fill: String::from("/delete "),
            label: String::from("🗑️ Delete selected (or id)"),
        },
        Suggestion {
            fill: String::from("/refresh"),
            label: String::from("🔄 Recompute both lists"),
        },
        Suggestion {
            fill: String::from("/quit"),
            label: String::from("🚪 Quit the application"),
        },
    ];

    if let Some(item) = app.selected_item() {
        for command in ["/toggle", "/delete"] {
            if let Some(suggestion) = base.iter_mut().find(|s| s.fill.starts_with(command)) {
                suggestion.fill = format!("{} {}", command, item.id);
            }
        }
    }

    if rest.is_empty() {
        if first.is_empty() {
            return base;
        } else {
            return base
                .into_iter()
                .filter(|s| s.fill[1..].starts_with(&first))
                .collect();
        }
    }

    match first.as_str() {
        "add" => {
            let entered = rest.trim();
            vec![Suggestion {
                fill: format!("/add {}", entered),
                label: String::from("Add this item"),
            }]
        }
        "toggle" | "t" => vec![Suggestion {
            fill: format!("/toggle {}", rest.trim()),
            label: String::from("✅ Toggle this id"),
        }],
        "delete" | "del" | "rm" => vec![Suggestion {
            fill: format!("/delete {}", rest.trim()),
            label: String::from("🗑️ Delete this id"),
        }],
        _ => Vec::new(),
    }
}
