use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod hints;
mod matching;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("transmap_hints=debug,info")
    } else {
        EnvFilter::new("transmap_hints=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Generate(args) => {
            cli::generate::run(args, cli.verbose)?;
        }
        cli::Commands::Flags(args) => {
            cli::flags::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
