use anyhow::Result;
use clap::Parser;

use ticked::store::ItemStore;

fn main() -> Result<()> {
    let cli = ticked::cli::Cli::parse();

    let store = if cli.empty {
        ItemStore::new()
    } else {
        ItemStore::seeded()
    };

    ticked::tui::run(store)
}
