mod cli;
mod commands;
mod document;
mod output;

use clap::Parser;
use tracing_subscriber::{EnvFilter, filter::Directive};

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("cover=info".parse::<Directive>()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let doc = document::load(cli.input.as_deref())?;

    match &cli.command {
        Commands::Get(args) => commands::query::get(&doc, args, cli.format),
        Commands::Keys(args) => commands::query::keys(&doc, args, cli.format),
        Commands::Count(args) => commands::query::count(&doc, args, cli.format),
        Commands::Set(args) => commands::edit::set(doc, args, cli.format),
        Commands::Append(args) => commands::edit::append(doc, args, cli.format),
    }
}
