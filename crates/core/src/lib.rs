pub mod command;
pub mod model;
pub mod store;

pub use command::{Command, CommandOutcome};
pub use model::{AddOutcome, DeleteOutcome, Item, ToggleOutcome};
pub use store::ItemStore;
