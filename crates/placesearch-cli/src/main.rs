//! placesearch — Command-line interface for placesearch-core
//!
//! This binary provides a simple way to exercise the destination search
//! engine from your terminal: catalog statistics, single-page queries,
//! full incremental loading, spelling corrections and query breakdowns.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog and index stats
//!   $ placesearch stats
//!
//! - One page of results (typos welcome)
//!   $ placesearch search "Barcelonna"
//!   $ placesearch search port --page 2
//!
//! - Walk all pages, printing the UI payload
//!   $ placesearch --json pages port
//!
//! - Nearest vocabulary words
//!   $ placesearch correct Amsterdan
//!   $ placesearch correct Portlnd --within 2
//!
//! - Snapshot a catalog for faster startup
//!   $ placesearch --input places.json snapshot places.json.bin
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample destinations bundled with
//! `placesearch-core`. Use `--input <path>` for your own catalog and
//! `--cache` to keep a binary snapshot next to it.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use log::debug;
use placesearch_core::prelude::*;
use placesearch_core::QueryPlan;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_catalog(args: &CliArgs) -> anyhow::Result<Catalog> {
    let path = args.input.clone().unwrap_or_else(|| {
        Catalog::default_data_dir().join(Catalog::default_dataset_filename())
    });
    debug!("loading catalog from {}", path.display());

    #[cfg(feature = "json")]
    let catalog = if args.cache {
        Catalog::load_via_cache(&path)
    } else {
        Catalog::load_from_path(&path)
    };
    #[cfg(not(feature = "json"))]
    let catalog = Catalog::load_from_path(&path);
    catalog.with_context(|| format!("failed to load catalog {}", path.display()))
}

fn print_page(options: &[PlaceRecord], has_more: bool) {
    if options.is_empty() {
        println!("No options");
    }
    for p in options {
        println!("{} [{}] ({:.4}, {:.4}) {}", p.term(), p.kind(), p.lat, p.lng, p.uid());
    }
    if has_more {
        println!("… more results available");
    }
}

fn print_plan(plan: &QueryPlan) {
    println!("Query: {:?} (folded {:?})", plan.query, plan.folded);
    for sub in &plan.sub_terms {
        match (&sub.corrected, sub.distance) {
            (Some(c), Some(d)) => println!("  {:?} -> {:?} (distance {d})", sub.raw, c),
            _ => println!("  {:?} -> (no correction)", sub.raw),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = SearchConfig::default()
        .with_page_size(args.page_size)
        .with_fold(args.fold.into())
        .with_max_correction_distance(args.max_distance);

    let catalog = load_catalog(&args)?;

    let engine = SearchEngine::with_config(catalog, config).into_shared();
    let controller = LoadController::new(engine.clone());

    match &args.command {
        Commands::Stats => {
            let stats = engine.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Places: {}", stats.places);
                println!("  Vocabulary terms: {}", stats.vocabulary);
                println!("  Index depth: {}", stats.index_depth);
            }
        }

        Commands::Search { query, page } => {
            if query.chars().count() < placesearch_core::MIN_QUERY_CHARS {
                eprintln!(
                    "Query too short: type at least {} characters",
                    placesearch_core::MIN_QUERY_CHARS
                );
            }
            let result = engine.query_page(query, *page);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_page(&result.options, result.has_more);
            }
        }

        Commands::Pages { query } => {
            let mut loaded: Vec<PlaceRecord> = Vec::new();
            let mut additional = Additional::default();
            loop {
                let page = controller.load_page(query, &loaded, additional);
                if args.json {
                    println!("{}", serde_json::to_string(&page)?);
                } else {
                    println!("-- page {} --", additional.page);
                    print_page(&page.options, page.has_more);
                }
                loaded.extend(page.options);
                additional = page.additional;
                if !page.has_more {
                    break;
                }
            }
            println!("Loaded {} option(s) in {} page(s)", loaded.len(), additional.page - 1);
        }

        Commands::Correct { word, within } => match within {
            Some(max) => {
                let hits = engine.index().find_within(word, *max);
                if hits.is_empty() {
                    println!("No vocabulary terms within {max} of {word:?}");
                }
                for c in hits {
                    println!("{} (distance {})", c.term, c.distance);
                }
            }
            None => match engine.index().closest(word) {
                Some(c) => println!("{} (distance {})", c.term, c.distance),
                None => println!("Vocabulary is empty; {word:?} stays as is"),
            },
        },

        Commands::Explain { query } => {
            let plan = engine.pipeline().plan(query);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_plan(&plan);
                println!("Matches: {}", engine.pipeline().matches(query).len());
            }
        }

        Commands::Snapshot { out } => {
            let catalog = engine.catalog();
            catalog
                .save_as(out)
                .with_context(|| format!("failed to write snapshot {}", out.display()))?;
            println!("Wrote {} places to {}", catalog.len(), out.display());
        }
    }

    Ok(())
}
