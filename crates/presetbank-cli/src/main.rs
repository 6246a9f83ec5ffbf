//! presetbank CLI - inspect, validate and initialise preset banks.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "presetbank")]
#[command(author, version, about = "Preset bank tool", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the factory bank of a module
    Defaults(commands::defaults::DefaultsArgs),

    /// Load a bank file and summarise its contents
    Show(commands::show::ShowArgs),

    /// Validate a bank file and report every problem
    Validate(commands::validate::ValidateArgs),

    /// Write factory banks into the user bank directory
    Init(commands::init::InitArgs),

    /// Show where banks are stored
    Paths,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Defaults(args) => commands::defaults::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Init(args) => commands::init::run(args),
        Commands::Paths => commands::paths::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_is_global_in_every_subcommand() {
        let cli = Cli::try_parse_from(["presetbank", "init", "-v", "-m", "jva"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(
            cli.command,
            Commands::Init(ref args) if args.variant == Some(presetbank_core::Variant::Jva)
        ));

        let cli = Cli::try_parse_from(["presetbank", "validate", "bank.toml", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Validate(ref args) if args.variant.is_none()));
    }
}
