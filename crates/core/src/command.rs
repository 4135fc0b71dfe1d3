use serde::Serialize;

use crate::model::{AddOutcome, DeleteOutcome, ToggleOutcome};

/// One of the three mutations the store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { title: String },
    Toggle { id: u64 },
    Delete { id: u64 },
}

impl Command {
    pub fn add(title: impl Into<String>) -> Self {
        Command::Add {
            title: title.into(),
        }
    }
}

/// Result of applying a [`Command`]. `Rejected` is the blank-title case:
/// the collection is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CommandOutcome {
    Added(AddOutcome),
    Rejected,
    Toggled(ToggleOutcome),
    Deleted(DeleteOutcome),
}

impl CommandOutcome {
    /// Whether the command changed the collection.
    pub fn mutated(&self) -> bool {
        match self {
            CommandOutcome::Added(_) => true,
            CommandOutcome::Rejected => false,
            CommandOutcome::Toggled(outcome) => outcome.changed,
            CommandOutcome::Deleted(outcome) => outcome.deleted,
        }
    }
}
