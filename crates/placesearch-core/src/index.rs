// crates/placesearch-core/src/index.rs

//! # Correction Index
//!
//! A BK-tree over the token vocabulary of the catalog, keyed by Levenshtein
//! distance. Built once from the catalog; there is no public insert, so the
//! tree cannot change after construction and is safe to share between
//! threads.
//!
//! Nodes live in a flat arena (`Vec<Node>`), children are addressed by
//! index and ordered by edge distance. Lookups walk children in ascending
//! edge order, which makes nearest-match tie-breaking deterministic for a
//! given insertion order.

use crate::config::MIN_TOKEN_CHARS;
use crate::model::Catalog;
use crate::text::{char_len, tokens};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use strsim::levenshtein;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Node {
    term: String,
    /// Edge distance -> arena index of the child.
    children: BTreeMap<usize, usize>,
}

impl Node {
    fn new(term: &str) -> Self {
        Self {
            term: term.to_owned(),
            children: BTreeMap::new(),
        }
    }
}

/// A vocabulary term found near a probe, with its edit distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Correction<'a> {
    pub term: &'a str,
    pub distance: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TermIndex {
    nodes: Vec<Node>,
}

impl TermIndex {
    /// Builds the index from every token of every place term that has at
    /// least [`MIN_TOKEN_CHARS`] characters. Duplicate tokens collapse;
    /// insertion follows catalog order.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_terms(
            catalog
                .iter()
                .flat_map(|place| tokens(&place.term))
                .filter(|token| char_len(token) >= MIN_TOKEN_CHARS),
        )
    }

    /// Builds the index from an explicit vocabulary. No length filter is
    /// applied here.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for term in terms {
            index.insert(term.as_ref());
        }
        index
    }

    fn insert(&mut self, term: &str) -> bool {
        if self.nodes.is_empty() {
            self.nodes.push(Node::new(term));
            return true;
        }

        let mut cur = 0;
        loop {
            let d = levenshtein(&self.nodes[cur].term, term);
            if d == 0 {
                return false;
            }
            match self.nodes[cur].children.get(&d) {
                Some(&next) => cur = next,
                None => {
                    let idx = self.nodes.len();
                    self.nodes.push(Node::new(term));
                    self.nodes[cur].children.insert(d, idx);
                    return true;
                }
            }
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.term.as_str())
    }

    pub fn contains(&self, term: &str) -> bool {
        !self.find_within(term, 0).is_empty()
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut queue = VecDeque::from([(0usize, 1usize)]);
        while let Some((idx, level)) = queue.pop_front() {
            deepest = deepest.max(level);
            for &child in self.nodes[idx].children.values() {
                queue.push_back((child, level + 1));
            }
        }
        deepest
    }

    /// Nearest vocabulary term to `token`.
    ///
    /// Among several terms at the same minimal distance the first one met
    /// wins; the walk is depth-first from the root with children taken in
    /// ascending edge order. Returns `None` only for an empty index.
    pub fn closest(&self, token: &str) -> Option<Correction<'_>> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut best: Option<Correction<'_>> = None;
        let mut stack = vec![0usize];

        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            let d = levenshtein(token, &node.term);
            if best.map_or(true, |b| d < b.distance) {
                best = Some(Correction {
                    term: &node.term,
                    distance: d,
                });
                if d == 0 {
                    break;
                }
            }

            // Only subtrees that could hold something strictly closer.
            let bound = best.map_or(usize::MAX, |b| b.distance);
            let lo = (d + 1).saturating_sub(bound);
            let hi = d.saturating_add(bound - 1);
            for &child in node.children.range(lo..=hi).map(|(_, c)| c).rev() {
                stack.push(child);
            }
        }

        best
    }

    /// Nearest term, or `token` unchanged when the index is empty.
    pub fn correct(&self, token: &str) -> String {
        self.closest(token)
            .map(|c| c.term.to_owned())
            .unwrap_or_else(|| token.to_owned())
    }

    /// Every term within `max_distance` of `token`, sorted by distance and
    /// then alphabetically.
    pub fn find_within(&self, token: &str, max_distance: usize) -> Vec<Correction<'_>> {
        let mut out = Vec::new();
        if self.nodes.is_empty() {
            return out;
        }

        let mut stack = vec![0usize];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            let d = levenshtein(token, &node.term);
            if d <= max_distance {
                out.push(Correction {
                    term: &node.term,
                    distance: d,
                });
            }
            let lo = d.saturating_sub(max_distance);
            let hi = d.saturating_add(max_distance);
            stack.extend(node.children.range(lo..=hi).map(|(_, &c)| c));
        }

        out.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.term.cmp(b.term)));
        out
    }
}
