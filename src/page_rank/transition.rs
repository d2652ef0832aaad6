//! Where a random surfer goes next.
//!
//! From a page with outgoing links the surfer follows one of them with
//! probability `damping`, chosen uniformly, and otherwise jumps to any page of
//! the graph. A page without links is treated as linking to every page,
//! itself included, so the jump becomes uniform.

use crate::{error::check_damping, Error, LinkGraph, Result};
use algograph::graph::VertexId;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct TransitionDistribution<'a> {
    graph: &'a LinkGraph,
    // in the graph's page order
    entries: Vec<(VertexId, f64)>,
}

impl<'a> TransitionDistribution<'a> {
    pub fn probability(&self, page: &str) -> Option<f64> {
        let v = self.graph.vertex(page)?;
        self.entries.iter().find(|(u, _)| *u == v).map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.entries.iter().map(|(v, p)| (self.graph.name(*v), *p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// Inverse-CDF selection: the first page, in page order, at which the
    /// cumulative probability reaches `u`.
    pub fn pick(&self, u: f64) -> &'a str {
        self.graph.name(self.pick_vertex(u))
    }

    pub(crate) fn pick_vertex(&self, u: f64) -> VertexId {
        pick_by_cdf(self.entries.iter().copied(), u)
            .unwrap_or_else(|| self.graph.order()[0])
    }
}

/// Walks `weights` accumulating mass and returns the first vertex whose
/// cumulative weight reaches `u`. Vertices without weight are never picked.
/// Rounding can leave the total a hair below `u`; the last weighted vertex is
/// returned then.
pub(crate) fn pick_by_cdf<I>(weights: I, u: f64) -> Option<VertexId>
where
    I: IntoIterator<Item = (VertexId, f64)>,
{
    let mut acc = 0.0;
    let mut last = None;
    for (v, w) in weights.into_iter().filter(|(_, w)| *w > 0.0) {
        acc += w;
        if u <= acc {
            return Some(v);
        }
        last = Some(v);
    }
    last
}

pub fn transition<'a>(
    graph: &'a LinkGraph,
    page: &str,
    damping: f64,
) -> Result<TransitionDistribution<'a>> {
    check_damping(damping)?;
    let u = graph
        .vertex(page)
        .ok_or_else(|| Error::UnknownPage(page.to_string()))?;
    Ok(transition_from(graph, u, damping))
}

pub(crate) fn transition_from(
    graph: &LinkGraph,
    u: VertexId,
    damping: f64,
) -> TransitionDistribution<'_> {
    let n = graph.page_count() as f64;
    let degree = graph.degree(u);
    let entries = if degree == 0 {
        graph.order().iter().map(|v| (*v, 1.0 / n)).collect()
    } else {
        let base = (1.0 - damping) / n;
        let follow = damping / degree as f64;
        let links: HashSet<VertexId, ahash::RandomState> = graph.sinks(u).collect();
        graph
            .order()
            .iter()
            .map(|v| {
                if links.contains(v) {
                    (*v, base + follow)
                } else {
                    (*v, base)
                }
            })
            .collect()
    };
    TransitionDistribution { graph, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn corpus() -> LinkGraph {
        LinkGraph::build([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn follows_links_or_jumps() {
        let g = corpus();
        let d = transition(&g, "1.html", 0.85).unwrap();
        assert!((d.probability("1.html").unwrap() - 0.0375).abs() < 1e-12);
        assert!((d.probability("2.html").unwrap() - 0.8875).abs() < 1e-12);
        assert!((d.probability("3.html").unwrap() - 0.0375).abs() < 1e-12);
        assert!((d.probability("4.html").unwrap() - 0.0375).abs() < 1e-12);
        assert!((d.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn splits_damping_across_links() {
        let g = corpus();
        let d = transition(&g, "2.html", 0.5).unwrap();
        assert!((d.probability("1.html").unwrap() - 0.375).abs() < 1e-12);
        assert!((d.probability("2.html").unwrap() - 0.125).abs() < 1e-12);
        assert!((d.probability("3.html").unwrap() - 0.375).abs() < 1e-12);
        assert!((d.probability("4.html").unwrap() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn dangling_page_jumps_uniformly() {
        let g = LinkGraph::build([("a", vec![]), ("b", vec!["a"]), ("c", vec!["a"])]);
        let d = transition(&g, "a", 0.85).unwrap();
        for (_, p) in d.iter() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
        assert!((d.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entries_in_page_order() {
        let g = corpus();
        let d = transition(&g, "3.html", 0.85).unwrap();
        let pages: Vec<_> = d.iter().map(|(p, _)| p).collect();
        assert_eq!(pages, vec!["1.html", "2.html", "3.html", "4.html"]);
    }

    #[test]
    fn pick_walks_cumulative_mass() {
        let g = corpus();
        let d = transition(&g, "1.html", 0.85).unwrap();
        assert_eq!(d.pick(0.0), "1.html");
        assert_eq!(d.pick(0.0374), "1.html");
        assert_eq!(d.pick(0.04), "2.html");
        assert_eq!(d.pick(0.9249), "2.html");
        assert_eq!(d.pick(0.93), "3.html");
        assert_eq!(d.pick(0.99), "4.html");
        assert_eq!(d.pick(1.0 + 1e-12), "4.html");
    }

    #[test]
    fn rejects_bad_input() {
        let g = corpus();
        assert!(matches!(
            transition(&g, "nope.html", 0.85),
            Err(Error::UnknownPage(p)) if p == "nope.html"
        ));
        assert!(matches!(
            transition(&g, "1.html", 0.0),
            Err(Error::InvalidDamping(_))
        ));
        assert!(matches!(
            transition(&g, "1.html", 1.0),
            Err(Error::InvalidDamping(_))
        ));
    }

    #[quickcheck]
    fn sums_to_one(corpus: crate::page_rank::tests::RandomCorpus, damping: u8) -> bool {
        let g = &corpus.graph;
        let damping = (damping as f64 + 1.0) / 257.0;
        g.pages().all(|p| {
            let d = transition(g, p, damping).unwrap();
            d.len() == g.page_count() && (d.total() - 1.0).abs() < 1e-9
        })
    }
}
