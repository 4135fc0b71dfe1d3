use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ticked",
    version,
    about = "A tiny keyboard-first terminal checklist.",
    after_help = "Examples:\n  ticked           Launch with the sample items\n  ticked --empty   Launch with an empty list"
)]
pub struct Cli {
    /// Start with an empty list instead of the sample items
    #[arg(long)]
    pub empty: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_empty_flag() {
        let cli = Cli::parse_from(["ticked", "--empty"]);
        assert!(cli.empty);

        let cli = Cli::parse_from(["ticked"]);
        assert!(!cli.empty);
    }
}
