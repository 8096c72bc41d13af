use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "elsewhere")]
#[command(version)]
#[command(about = "Instant ranked search over a tabletop rules catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog
    #[command(group(ArgGroup::new("edition").args(["legacy", "no_legacy"])))]
    Search {
        /// Query text (multiple words are joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,

        /// Catalog JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Overrides JSONL file applied on load
        #[arg(short, long)]
        overrides: Option<PathBuf>,

        /// Include legacy-edition entries
        #[arg(long)]
        legacy: bool,

        /// Exclude legacy-edition entries
        #[arg(long)]
        no_legacy: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Show each result's score
        #[arg(long)]
        scores: bool,
    },

    /// Merge overrides into a catalog and write the result
    Export {
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        #[arg(short, long)]
        overrides: Option<PathBuf>,

        /// Output JSON file
        #[arg(long)]
        out: PathBuf,
    },

    /// Show catalog statistics
    Stats {
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Compare the catalog against a reference list
    Coverage {
        /// Reference catalog JSON file
        #[arg(short, long)]
        reference: PathBuf,

        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Only consider catalog entries of this edition
        #[arg(long, value_enum)]
        edition: Option<EditionArg>,
    },

    /// Show or set whether searches include legacy entries by default
    Legacy {
        #[command(subcommand)]
        action: Option<LegacyAction>,
    },
}

#[derive(Subcommand)]
pub enum LegacyAction {
    /// Include legacy entries by default
    Show,
    /// Exclude legacy entries by default
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EditionArg {
    Legacy,
    #[value(name = "2024")]
    Current,
}
