mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, LegacyAction};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            catalog,
            overrides,
            legacy,
            no_legacy,
            json,
            scores,
        } => commands::search::run(commands::search::SearchArgs {
            query: query.join(" "),
            catalog,
            overrides,
            show_legacy: match (legacy, no_legacy) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            json,
            scores,
        }),
        Commands::Export {
            catalog,
            overrides,
            out,
        } => commands::export::run(catalog, overrides, &out),
        Commands::Stats { catalog, json } => commands::stats::run(catalog, json),
        Commands::Coverage {
            reference,
            catalog,
            edition,
        } => commands::coverage::run(&reference, catalog, edition),
        Commands::Legacy { action } => match action {
            None => commands::legacy::run_status(),
            Some(LegacyAction::Show) => commands::legacy::run_set(true),
            Some(LegacyAction::Hide) => commands::legacy::run_set(false),
        },
    }
}
