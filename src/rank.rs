use crate::{common::Weights, graph::Page, LinkGraph};
use std::collections::{BTreeMap, BTreeSet};

/// Final ranks of a run, keyed by page in lexicographic order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankVector {
    ranks: BTreeMap<Page, f64>,
}

impl RankVector {
    /// Every page of `graph` at `1/N`.
    pub fn uniform(graph: &LinkGraph) -> Self {
        let n = graph.page_count() as f64;
        graph.pages().map(|p| (p.to_string(), 1.0 / n)).collect()
    }

    pub(crate) fn from_weights(graph: &LinkGraph, weights: &Weights) -> Self {
        let ranks = graph
            .order()
            .iter()
            .map(|v| {
                let w = weights.get(v).copied().unwrap_or(0.0);
                (graph.name(*v).to_string(), w)
            })
            .collect();
        Self { ranks }
    }

    /// Resolves these ranks onto the vertices of `graph`. Pages unknown to the
    /// graph are ignored, pages missing here get zero.
    pub(crate) fn to_weights(&self, graph: &LinkGraph) -> Weights {
        graph
            .order()
            .iter()
            .map(|v| (*v, self.get(graph.name(*v)).unwrap_or(0.0)))
            .collect()
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Pages and ranks in lexicographic page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(p, r)| (p.as_str(), *r))
    }

    /// Sum of absolute differences over the union of both page sets.
    pub fn l1_distance(&self, other: &RankVector) -> f64 {
        let pages: BTreeSet<&str> = self
            .ranks
            .keys()
            .chain(other.ranks.keys())
            .map(String::as_str)
            .collect();
        pages
            .into_iter()
            .map(|p| (self.get(p).unwrap_or(0.0) - other.get(p).unwrap_or(0.0)).abs())
            .sum()
    }
}

impl FromIterator<(Page, f64)> for RankVector {
    fn from_iter<I: IntoIterator<Item = (Page, f64)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RankVector {
    type Item = (&'a str, f64);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, f64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rv(pairs: &[(&str, f64)]) -> RankVector {
        pairs.iter().map(|(p, r)| (p.to_string(), *r)).collect()
    }

    #[test]
    fn iterates_in_page_order() {
        let r = rv(&[("b", 0.25), ("a", 0.75)]);
        let pages: Vec<_> = r.iter().map(|(p, _)| p).collect();
        assert_eq!(pages, vec!["a", "b"]);
        assert!((r.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn l1_distance_over_union() {
        let a = rv(&[("a", 0.5), ("b", 0.5)]);
        let b = rv(&[("a", 0.25), ("c", 0.75)]);
        // |0.5-0.25| + 0.5 + 0.75
        assert!((a.l1_distance(&b) - 1.5).abs() < 1e-12);
        assert!((b.l1_distance(&a) - 1.5).abs() < 1e-12);
        assert_eq!(a.l1_distance(&a), 0.0);
    }

    #[test]
    fn round_trips_through_graph() {
        let g = LinkGraph::build([("a", vec!["b"]), ("b", vec!["a"])]);
        let r = rv(&[("a", 0.3), ("b", 0.7), ("zzz", 1.0)]);
        let back = RankVector::from_weights(&g, &r.to_weights(&g));
        assert_eq!(back, rv(&[("a", 0.3), ("b", 0.7)]));
    }
}
