//! The link graph consumed by both estimators.
//!
//! A [`LinkGraph`] is built once from raw, unfiltered per-page link lists and
//! is immutable afterwards. Building it enforces three invariants:
//!
//! - every link target is itself a page of the graph,
//! - no page links to itself,
//! - a page links to another page at most once.
//!
//! Pages without outgoing links ("dangling" pages) are kept as they are. The
//! estimators treat them as linking to every page.

use crate::{Error, Result};
use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

pub type Page = String;

/// Raw input as produced by a crawler: page to outgoing link targets, not yet
/// restricted to pages of the corpus.
pub type RawCorpus = BTreeMap<Page, BTreeSet<Page>>;

#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    // sorted by page name; this is the fixed order every estimator walks in
    order: Vec<VertexId>,
    names: HashMap<VertexId, Page, ahash::RandomState>,
    ids: HashMap<Page, VertexId, ahash::RandomState>,
    out_degrees: HashMap<VertexId, usize, ahash::RandomState>,
}

impl LinkGraph {
    pub fn build<I, P, L, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator<Item = T>,
        T: Into<Page>,
    {
        let mut corpus = RawCorpus::new();
        for (page, links) in raw {
            let page = page.into();
            let entry = corpus.entry(page.clone()).or_default();
            entry.extend(
                links
                    .into_iter()
                    .map(|l| -> Page { l.into() })
                    .filter(|l| *l != page),
            );
        }
        let known: BTreeSet<Page> = corpus.keys().cloned().collect();
        let mut dropped = 0usize;
        for links in corpus.values_mut() {
            let before = links.len();
            links.retain(|l| known.contains(l));
            dropped += before - links.len();
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut order = Vec::with_capacity(corpus.len());
        let mut names = HashMap::with_hasher(ahash::RandomState::new());
        let mut ids = HashMap::with_hasher(ahash::RandomState::new());
        for page in corpus.keys() {
            let v = graph.add_vertex();
            order.push(v);
            names.insert(v, page.clone());
            ids.insert(page.clone(), v);
        }
        let mut out_degrees = HashMap::with_hasher(ahash::RandomState::new());
        for (page, links) in corpus.iter() {
            let u = ids[page];
            for link in links.iter() {
                graph.add_edge(u, ids[link]);
            }
            out_degrees.insert(u, links.len());
        }
        debug!(
            pages = order.len(),
            links = graph.edge_size(),
            dropped,
            "built link graph"
        );

        Self {
            graph,
            order,
            names,
            ids,
            out_degrees,
        }
    }

    pub fn page_count(&self) -> usize {
        self.order.len()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.ids.contains_key(page)
    }

    /// Pages in lexicographic order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(|v| self.name(*v))
    }

    /// Outgoing links of `page` in lexicographic order, or `None` when `page`
    /// is not part of the graph.
    pub fn links(&self, page: &str) -> Option<Vec<&str>> {
        let u = self.vertex(page)?;
        let mut links: Vec<&str> = self
            .graph
            .out_edges(&u)
            .map(|e| self.name(e.sink))
            .collect();
        links.sort_unstable();
        Some(links)
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.vertex(page).map(|v| self.degree(v))
    }

    pub fn is_dangling(&self, page: &str) -> Option<bool> {
        self.out_degree(page).map(|d| d == 0)
    }

    /// Rejects graphs neither estimator can run on.
    pub fn check(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::InvalidGraph("graph has no pages".to_string()));
        }
        if let Some(e) = self.graph.iter_edges().find(|e| e.source == e.sink) {
            return Err(Error::InvalidGraph(format!(
                "page {} links to itself",
                self.name(e.source)
            )));
        }
        Ok(())
    }

    pub(crate) fn vertex(&self, page: &str) -> Option<VertexId> {
        self.ids.get(page).copied()
    }

    pub(crate) fn name(&self, v: VertexId) -> &str {
        self.names.get(&v).map(String::as_str).unwrap_or_default()
    }

    pub(crate) fn order(&self) -> &[VertexId] {
        &self.order
    }

    pub(crate) fn degree(&self, v: VertexId) -> usize {
        self.out_degrees.get(&v).copied().unwrap_or_default()
    }

    pub(crate) fn sinks(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.out_edges(&v).map(|e| e.sink)
    }

    pub(crate) fn sources(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.in_edges(&v).map(|e| e.source)
    }
}

impl<P, L, T> FromIterator<(P, L)> for LinkGraph
where
    P: Into<Page>,
    L: IntoIterator<Item = T>,
    T: Into<Page>,
{
    fn from_iter<I: IntoIterator<Item = (P, L)>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_self_links() {
        let g = LinkGraph::build([("a", vec!["a", "b"]), ("b", vec!["b"])]);
        assert_eq!(g.links("a").unwrap(), vec!["b"]);
        assert_eq!(g.links("b").unwrap(), Vec::<&str>::new());
        assert!(g.check().is_ok());
    }

    #[test]
    fn drops_links_outside_corpus() {
        let g = LinkGraph::build([("a", vec!["b", "x.html"]), ("b", vec!["y.html"])]);
        assert_eq!(g.page_count(), 2);
        assert_eq!(g.link_count(), 1);
        assert_eq!(g.links("a").unwrap(), vec!["b"]);
        assert_eq!(g.is_dangling("b"), Some(true));
        assert!(!g.contains("x.html"));
    }

    #[test]
    fn duplicate_links_collapse() {
        let g = LinkGraph::build([("a", vec!["b", "b", "c"]), ("b", vec![]), ("c", vec![])]);
        assert_eq!(g.out_degree("a"), Some(2));
        assert_eq!(g.link_count(), 2);
    }

    #[test]
    fn duplicate_pages_merge() {
        let g = LinkGraph::build([
            ("a", vec!["b"]),
            ("b", vec![]),
            ("c", vec![]),
            ("a", vec!["c"]),
        ]);
        assert_eq!(g.page_count(), 3);
        assert_eq!(g.links("a").unwrap(), vec!["b", "c"]);
    }

    #[test]
    fn pages_are_sorted() {
        let g = LinkGraph::build([
            ("c", Vec::<&str>::new()),
            ("a", vec![]),
            ("b", vec![]),
        ]);
        assert_eq!(g.pages().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_page() {
        let g = LinkGraph::build([("a", Vec::<&str>::new())]);
        assert_eq!(g.links("z"), None);
        assert_eq!(g.out_degree("z"), None);
    }

    #[test]
    fn empty_graph_is_invalid() {
        let g = LinkGraph::build(Vec::<(&str, Vec<&str>)>::new());
        assert!(g.is_empty());
        assert!(matches!(g.check(), Err(Error::InvalidGraph(_))));
    }

    #[test]
    fn from_raw_corpus() {
        let mut raw = RawCorpus::new();
        raw.insert("1.html".into(), ["2.html".to_string()].into_iter().collect());
        raw.insert("2.html".into(), BTreeSet::new());
        let g: LinkGraph = raw.into_iter().collect();
        assert_eq!(g.links("1.html").unwrap(), vec!["2.html"]);
    }
}
