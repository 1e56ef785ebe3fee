use clap::Parser;
use tracing_subscriber::EnvFilter;

mod binding;
mod cli;
mod core;
mod host;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("colnames=debug,info")
    } else {
        EnvFilter::new("colnames=warn")
    };

    // stdout carries records, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Formats => {
            cli::formats::run(cli.output)?;
        }
        cli::Commands::Bindings(args) => {
            cli::bindings::run(args, cli.output, cli.verbose)?;
        }
        cli::Commands::Cut(args) => {
            cli::cut::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
