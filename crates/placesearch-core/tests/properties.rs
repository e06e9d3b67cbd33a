#![cfg(feature = "json")]

use placesearch_core::prelude::*;
use placesearch_core::PAGE_SIZE;
use std::collections::HashSet;

fn bundled() -> SearchEngine {
    SearchEngine::new(Catalog::load_default().expect("bundled dataset"))
}

fn ports(n: usize) -> SearchEngine {
    SearchEngine::new(
        (0..n)
            .map(|i| {
                PlaceRecord::new(format!("Seaport District {i:02}"), format!("sp{i}"))
                    .with_kind("district")
            })
            .collect(),
    )
}

/// Walks `load_page` from page 1 until `has_more` is false.
fn all_pages(controller: &LoadController, query: &str) -> Vec<LoadedPage> {
    let mut pages = Vec::new();
    let mut loaded: Vec<PlaceRecord> = Vec::new();
    let mut additional = Additional::default();
    loop {
        let page = controller.load_page(query, &loaded, additional);
        loaded.extend(page.options.iter().cloned());
        additional = page.additional;
        let done = !page.has_more;
        pages.push(page);
        if done || pages.len() > 100 {
            break;
        }
    }
    pages
}

const QUERIES: &[&str] = &[
    "port", "Rime", "rome", "Pari", "Portland", "zurich", "Lisbon, Portugl", "New York",
    "united", "Kyto", "ocean", "  ,,", "Italy Spain",
];

#[test]
fn short_queries_yield_nothing_on_any_page() {
    let engine = bundled();
    for q in ["", "R", "Ro", "ab", "zz", "Ö"] {
        for page in [0, 1, 2, 50] {
            assert_eq!(engine.query_page(q, page), ResultPage::empty(), "{q:?} page {page}");
        }
    }
}

#[test]
fn identical_calls_give_identical_pages() {
    let a = bundled();
    let b = bundled();
    for q in QUERIES {
        for page in 1..=3 {
            assert_eq!(a.query_page(q, page), a.query_page(q, page));
            assert_eq!(a.query_page(q, page), b.query_page(q, page), "{q:?} page {page}");
        }
    }
}

#[test]
fn concatenated_pages_equal_the_full_match_set() {
    let engine = bundled().into_shared();
    let controller = LoadController::new(engine.clone());
    for q in QUERIES.iter().chain(["united states", "land"].iter()) {
        let pages = all_pages(&controller, q);
        let concatenated: Vec<PlaceRecord> =
            pages.iter().flat_map(|p| p.options.iter().cloned()).collect();

        let expected: Vec<PlaceRecord> =
            engine.pipeline().matches(q).into_iter().cloned().collect();
        assert_eq!(concatenated, expected, "{q:?}");

        let distinct: HashSet<&str> = concatenated.iter().map(|p| p.term.as_str()).collect();
        assert_eq!(distinct.len(), concatenated.len(), "duplicate terms for {q:?}");
    }
}

#[test]
fn fuzzy_results_contain_substring_results() {
    let engine = bundled();
    let pipeline = engine.pipeline();
    for q in QUERIES {
        let all: HashSet<&str> = pipeline.matches(q).iter().map(|p| p.uid.as_str()).collect();
        for exact in pipeline.exact_matches(q) {
            assert!(all.contains(exact.uid.as_str()), "{q:?} lost {}", exact.term);
        }
    }
}

#[test]
fn one_edit_misspelling_finds_rome() {
    let engine = SearchEngine::new(Catalog::new(vec![PlaceRecord::new("Rome, Italy", "r1")
        .with_coords(41.9, 12.5)
        .with_kind("city")]));
    let page = engine.query_page("Rime", 1);
    assert_eq!(page.options.len(), 1);
    assert_eq!(page.options[0].term, "Rome, Italy");
    assert!(!page.has_more);
}

#[test]
fn misspellings_work_on_the_bundled_catalog() {
    let engine = bundled();
    let terms = |q: &str| -> Vec<String> {
        engine.search(q).into_iter().map(|p| p.term).collect()
    };
    assert!(terms("Barcelonna").contains(&"Barcelona, Spain".to_owned()));
    assert!(terms("Amsterdan").contains(&"Amsterdam, Netherlands".to_owned()));
    assert!(terms("Kyto").contains(&"Kyoto, Japan".to_owned()));
}

#[test]
fn every_match_contains_query_or_a_correction_ignoring_case() {
    let engine = bundled();
    let pipeline = engine.pipeline();
    for q in QUERIES.iter().copied().chain(["zurich", "koln", "reykjavik"]) {
        let needles: Vec<String> = std::iter::once(q.to_lowercase())
            .chain(
                pipeline
                    .plan(q)
                    .sub_terms
                    .into_iter()
                    .filter_map(|s| s.corrected)
                    .map(|c| c.to_lowercase()),
            )
            .collect();
        for place in pipeline.matches(q) {
            let term = place.term.to_lowercase();
            assert!(
                needles.iter().any(|n| term.contains(n.as_str())),
                "{q:?} matched {:?}",
                place.term
            );
        }
    }
}

#[test]
fn pages_never_exceed_page_size() {
    let engine = ports(37);
    for q in ["port", "seaport", "district", "Seaport District 1"] {
        for page in 1..=6 {
            assert!(engine.query_page(q, page).options.len() <= PAGE_SIZE);
        }
    }
    let bundled = bundled();
    for q in QUERIES {
        assert!(bundled.query_page(q, 1).options.len() <= PAGE_SIZE);
    }
}

#[test]
fn twenty_five_ports_load_as_ten_ten_five() {
    let controller = LoadController::new(ports(25).into_shared());

    let first = controller.load_page("port", &[], Additional { page: 1 });
    assert_eq!(first.options.len(), 10);
    assert!(first.has_more);
    assert_eq!(first.additional.page, 2);

    let second = controller.load_page("port", &first.options, first.additional);
    assert_eq!(second.options.len(), 10);
    assert!(second.has_more);
    assert_eq!(second.additional.page, 3);

    let third = controller.load_page("port", &second.options, second.additional);
    assert_eq!(third.options.len(), 5);
    assert!(!third.has_more);
    assert_eq!(third.additional.page, 4);

    let uids: HashSet<String> = [first, second, third]
        .into_iter()
        .flat_map(|p| p.options.into_iter().map(|o| o.uid))
        .collect();
    assert_eq!(uids.len(), 25);
}

#[test]
fn empty_catalog_returns_empty_pages() {
    let controller = LoadController::new(SearchEngine::new(Catalog::default()).into_shared());
    for q in ["rome", "port", "Lisbon, Portugal"] {
        let page = controller.load_page(q, &[], Additional::default());
        assert!(page.options.is_empty());
        assert!(!page.has_more);
        assert!(controller.search(q).is_empty());
    }
}

#[test]
fn paging_past_the_end_is_empty() {
    let engine = ports(12);
    let page = engine.query_page("port", 9);
    assert!(page.options.is_empty());
    assert!(!page.has_more);
}

#[test]
fn state_is_never_missing() {
    let catalog = Catalog::load_default().unwrap();
    let reykjavik = catalog.find_named("Reykjavik, Iceland").expect("bundled entry");
    assert_eq!(reykjavik.state, "");
}
