//! Incremental loading, the way an async dropdown consumes results.
//!
//! Each call returns one page plus the cursor for the next one; the loop
//! stops once `has_more` is false.

use placesearch_core::prelude::*;

fn main() -> Result<()> {
    let engine = SearchEngine::new(Catalog::load_default()?).into_shared();
    let controller = LoadController::new(engine);

    let query = "port";
    let mut loaded: Vec<PlaceRecord> = Vec::new();
    let mut additional = Additional::default();

    loop {
        let page = controller.load_page(query, &loaded, additional);
        println!(
            "page {}: {} option(s), has_more = {}",
            additional.page,
            page.options.len(),
            page.has_more
        );
        for place in &page.options {
            println!("  {}", place.term);
        }
        loaded.extend(page.options);
        additional = page.additional;
        if !page.has_more {
            break;
        }
    }

    println!("\n{} option(s) for {query:?}", loaded.len());
    Ok(())
}
