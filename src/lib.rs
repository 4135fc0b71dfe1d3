pub use ticked_tui::cli;
pub use ticked_tui::tui;

pub use ticked_core as core;
pub use ticked_core::command;
pub use ticked_core::model;
pub use ticked_core::store;
