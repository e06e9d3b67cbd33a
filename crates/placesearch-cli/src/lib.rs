//! placesearch-cli
//! ===============
//!
//! Command-line interface for the `placesearch-core` destination search engine.
//!
//! This crate primarily provides a binary (`placesearch`). The library target
//! only exists so that docs.rs renders this overview. See the README for
//! full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install placesearch-cli
//! placesearch --help
//! placesearch stats
//! placesearch search "Barcelonna"
//! placesearch --json pages port
//! placesearch explain "Amsterdan, Netherland"
//! ```
//!
//! For programmatic access use the [`placesearch-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; the binary is the deliverable.
