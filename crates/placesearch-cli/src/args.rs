use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use placesearch_core::TextFold;
use std::path::PathBuf;

/// CLI arguments for placesearch
#[derive(Debug, Parser)]
#[command(
    name = "placesearch",
    version,
    about = "CLI for querying and inspecting a placesearch destination catalog"
)]
pub struct CliArgs {
    /// Catalog to load: a JSON array of places (.json / .json.gz) or a
    /// snapshot (.bin). Defaults to the bundled sample destinations.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Read `<input>.bin` when it is fresh, and refresh it otherwise
    #[arg(long = "cache", global = true)]
    pub cache: bool,

    /// How terms and queries are normalized before matching
    #[arg(long = "fold", value_enum, default_value_t = FoldArg::Case, global = true)]
    pub fold: FoldArg,

    /// Places per page
    #[arg(long = "page-size", default_value_t = placesearch_core::PAGE_SIZE, global = true)]
    pub page_size: usize,

    /// Ignore corrections farther than this edit distance
    #[arg(long = "max-distance", global = true)]
    pub max_distance: Option<usize>,

    /// Print results as JSON, in the shape the UI receives
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FoldArg {
    /// Ignore case only
    Case,
    /// Ignore case and accents ("zurich" finds "Zürich")
    Accents,
}

impl From<FoldArg> for TextFold {
    fn from(f: FoldArg) -> Self {
        match f {
            FoldArg::Accents => TextFold::Accents,
            FoldArg::Case => TextFold::Case,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog and its correction index
    Stats,

    /// Run one query and print a single page
    Search {
        query: String,
        /// 1-based page number
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// Load every page of a query the way the dropdown does on scroll
    Pages { query: String },

    /// Show the nearest vocabulary term for a word
    Correct {
        word: String,
        /// List every term within this edit distance instead
        #[arg(short = 'w', long = "within")]
        within: Option<usize>,
    },

    /// Show how a query is split and corrected
    Explain { query: String },

    /// Write a binary snapshot of the loaded catalog
    Snapshot {
        /// Output path (.bin, or .bin.gz for a compressed snapshot)
        out: PathBuf,
    },
}
