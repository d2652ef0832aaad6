use super::*;
use algograph::graph::VertexId;
use crate::{
    common::{max_abs_diff, normalize, Weights},
    error::check_damping,
    Error, LinkGraph, RankVector,
};
use tracing::{debug, instrument, trace, warn};

pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// A pass that moves no page by this much or more ends the iteration.
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            threshold: 0.001,
            max_iterations: 1000,
        }
    }
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        check_damping(self.damping)?;
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidIterationCap(self.max_iterations));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Estimate {
    pub page_rank: RankVector,
    pub iterations: usize,
    /// Largest change of a single page in the last pass.
    pub max_delta: f64,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        g.check()?;
        config.validate()?;
        let dangling = g
            .order()
            .iter()
            .copied()
            .filter(|v| g.degree(*v) == 0)
            .collect();
        Ok(Self {
            graph: g,
            damping: config.damping,
            threshold: config.threshold,
            max_iterations: config.max_iterations,
            dangling,
        })
    }

    /// One full pass of the PageRank recurrence over `p`. Dangling pages
    /// spread their rank over every page.
    fn step(&self, p: &Weights) -> Weights {
        let g = self.graph;
        let n = g.page_count() as f64;
        let damping = self.damping;
        let rank = |v: &VertexId| p.get(v).copied().unwrap_or(0.0);
        let dangling: f64 = self.dangling.iter().map(rank).sum();
        let base = (1.0 - damping) / n + damping * dangling / n;
        g.order()
            .iter()
            .map(|v| {
                let inflow: f64 = g
                    .sources(*v)
                    .map(|u| rank(&u) / g.degree(u) as f64)
                    .sum();
                (*v, base + damping * inflow)
            })
            .collect()
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Estimate;

    #[instrument(skip_all, fields(pages = self.graph.page_count(), damping = self.damping))]
    fn calc(&mut self, start: &RankVector) -> crate::Result<Self::Result> {
        let mut p = start_weights(self.graph, start)?;
        let mut max_delta = f64::INFINITY;
        for iteration in 1..=self.max_iterations {
            let mut r = self.step(&p);
            normalize(&mut r);
            // against the previous full pass, after normalizing both
            max_delta = max_abs_diff(&p, &r);
            trace!(iteration, max_delta, "pass finished");
            if max_delta < self.threshold {
                debug!(iterations = iteration, max_delta, "converged");
                return Ok(Self::Result {
                    page_rank: RankVector::from_weights(self.graph, &r),
                    iterations: iteration,
                    max_delta,
                });
            }
            p = r;
        }
        warn!(
            iterations = self.max_iterations,
            max_delta, "iteration cap reached without converging"
        );
        Err(Error::ConvergenceFailure {
            iterations: self.max_iterations,
            max_delta,
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

/// Iterates from the uniform distribution with the default threshold and
/// iteration cap.
pub fn iterate_rank(graph: &LinkGraph, damping: f64) -> crate::Result<RankVector> {
    let config = Config {
        damping,
        ..Config::default()
    };
    iterate_rank_with(graph, &config)
}

pub fn iterate_rank_with(graph: &LinkGraph, config: &Config) -> crate::Result<RankVector> {
    let mut ipr = IteratedPageRank::new(graph, config)?;
    let start = RankVector::uniform(graph);
    ipr.calc(&start).map(PageRankResult::into_page_rank)
}
