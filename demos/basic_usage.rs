//! Basic usage example for placesearch
//!
//! This example demonstrates how to:
//! - Load the bundled destination catalog
//! - Run queries with and without typos
//! - Inspect how a query was corrected

use placesearch_core::prelude::*;

fn main() -> Result<()> {
    println!("=== placesearch Basic Usage Example ===\n");

    println!("Loading destination catalog...");
    let engine = SearchEngine::new(Catalog::load_default()?);
    let stats = engine.stats();
    println!(
        "✓ {} places, {} vocabulary terms (index depth {})\n",
        stats.places, stats.vocabulary, stats.index_depth
    );

    println!("--- Example 1: Exact substring ---");
    for place in engine.search("lisbon") {
        println!("{} [{}]", place.term, place.kind);
    }
    println!();

    println!("--- Example 2: A typo gets corrected ---");
    for place in engine.search("Barcelonna") {
        println!("{} [{}]", place.term, place.kind);
    }
    println!();

    println!("--- Example 3: Accent folding is opt-in ---");
    println!("\"zurich\" -> {} option(s)", engine.search("zurich").len());
    let folding = SearchEngine::with_config(
        engine.catalog().clone(),
        SearchConfig::default().with_fold(TextFold::Accents),
    );
    for place in folding.search("zurich") {
        println!("{} ({}, {})", place.term, place.lat, place.lng);
    }
    println!();

    println!("--- Example 4: How a query is read ---");
    let plan = engine.pipeline().plan("Amsterdan, Netherland");
    for sub in &plan.sub_terms {
        println!(
            "{:?} -> {:?} (distance {:?})",
            sub.raw, sub.corrected, sub.distance
        );
    }
    println!();

    println!("--- Example 5: Short queries return nothing ---");
    println!("\"ro\" -> {} option(s)", engine.search("ro").len());

    Ok(())
}
