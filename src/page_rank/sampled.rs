//! Monte-Carlo PageRank: follow a random surfer for a fixed number of steps
//! and rank every page by how often it was visited.

use super::*;
use crate::{error::check_damping, graph::Page, Error, LinkGraph, RankVector};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    graph: &'a LinkGraph,
    damping: f64,
    samples: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(Error::InvalidSampleCount(self.samples));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Estimate {
    pub page_rank: RankVector,
    pub visits: BTreeMap<Page, usize>,
    pub samples: usize,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    /// The surfer draws every step from `rng`; pass a seeded generator for
    /// reproducible runs.
    pub fn new(g: &'a LinkGraph, config: &Config, rng: R) -> crate::Result<Self> {
        g.check()?;
        config.validate()?;
        Ok(Self {
            graph: g,
            damping: config.damping,
            samples: config.samples,
            rng,
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Estimate;

    #[instrument(skip_all, fields(pages = self.graph.page_count(), samples = self.samples))]
    fn calc(&mut self, start: &RankVector) -> crate::Result<Self::Result> {
        let graph = self.graph;
        let start = start_weights(graph, start)?;
        let first = {
            let u: f64 = self.rng.random();
            let weighted = graph
                .order()
                .iter()
                .map(|v| (*v, start.get(v).copied().unwrap_or(0.0)));
            pick_by_cdf(weighted, u).ok_or_else(|| {
                Error::InvalidGraph("graph has no pages".to_string())
            })?
        };

        let mut visits: HashMap<_, usize, ahash::RandomState> =
            graph.order().iter().map(|v| (*v, 0)).collect();
        let mut page = first;
        for _ in 0..self.samples {
            *visits.entry(page).or_default() += 1;
            let next = transition_from(graph, page, self.damping);
            let u: f64 = self.rng.random();
            page = next.pick_vertex(u);
        }

        let n = self.samples as f64;
        let ranks = visits.iter().map(|(v, c)| (*v, *c as f64 / n)).collect();
        let page_rank = RankVector::from_weights(graph, &ranks);
        let visits = graph
            .order()
            .iter()
            .map(|v| {
                let c = visits.get(v).copied().unwrap_or(0);
                (graph.name(*v).to_string(), c)
            })
            .collect();
        debug!(start = graph.name(first), "sampling finished");
        Ok(Self::Result {
            page_rank,
            visits,
            samples: self.samples,
        })
    }
}

impl PageRankResult for self::Estimate {
    fn page_rank(&self) -> &RankVector {
        &self.page_rank
    }

    fn into_page_rank(self) -> RankVector {
        self.page_rank
    }
}

/// Samples `num_samples` steps of a random surfer that starts on a uniformly
/// chosen page.
pub fn sample_rank<R>(
    graph: &LinkGraph,
    damping: f64,
    num_samples: usize,
    rng: &mut R,
) -> crate::Result<RankVector>
where
    R: Rng + ?Sized,
{
    let config = Config {
        damping,
        samples: num_samples,
    };
    let mut spr = SampledPageRank::new(graph, &config, rng)?;
    let start = RankVector::uniform(graph);
    spr.calc(&start).map(PageRankResult::into_page_rank)
}
