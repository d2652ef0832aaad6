//! PageRank for a small corpus of linked pages.
//!
//! A [`LinkGraph`] is built once from raw link lists and then ranked by two
//! independent estimators: [`sample_rank`], a random surfer whose visit
//! frequencies approximate the ranks, and [`iterate_rank`], which applies the
//! PageRank recurrence until the ranks stop moving.
//!
//! ```no_run
//! use corpus_rank::{iterate_rank, sample_rank, LinkGraph};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let graph = LinkGraph::build([("a.html", vec!["b.html"]), ("b.html", vec![])]);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let sampled = sample_rank(&graph, 0.85, 10_000, &mut rng)?;
//! let iterated = iterate_rank(&graph, 0.85)?;
//! assert!(iterated.get("b.html") > iterated.get("a.html"));
//! # let _ = sampled;
//! # Ok::<(), corpus_rank::Error>(())
//! ```

mod common;
pub mod config;
pub use self::config::RankConfig;
pub mod corpus;
pub use self::corpus::crawl;
mod error;
pub use self::error::{Error, Result};
pub mod graph;
pub use self::graph::{LinkGraph, Page, RawCorpus};
pub mod page_rank;
pub use self::page_rank::{iterate_rank, sample_rank, transition, TransitionDistribution};
mod rank;
pub use self::rank::RankVector;
pub mod report;
pub use self::report::Report;
