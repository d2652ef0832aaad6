//! corpus-rank
//!
//! Ranks the HTML pages of a directory by PageRank.

use anyhow::{Context, Result};
use clap::Parser;
use corpus_rank::{
    crawl,
    page_rank::{IteratedPageRank, PageRank, PageRankResult, SampledPageRank},
    LinkGraph, RankConfig, RankVector, Report,
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "corpus-rank", version, about)]
struct Cli {
    /// Directory of `.html` pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Steps taken by the random surfer
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Iteration stops once no page changes by this much in a pass
    #[arg(long, default_value_t = 0.001)]
    threshold: f64,

    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,

    /// Seed for the random surfer; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> RankConfig {
        RankConfig {
            damping: self.damping,
            samples: self.samples,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
        }
    }
}

/// `RUST_LOG` wins when set and parseable; otherwise `-v` picks debug over warn.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref(), cli.verbose))
        .init();

    let config = cli.config();
    config.validate().context("invalid configuration")?;

    let raw = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;
    let graph = LinkGraph::build(raw);
    info!(
        pages = graph.page_count(),
        links = graph.link_count(),
        "corpus loaded"
    );

    let start = RankVector::uniform(&graph);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sampled = SampledPageRank::new(&graph, &config.sampled(), rng)
        .and_then(|mut spr| spr.calc(&start))
        .context("sampling failed")?;
    let iterated = IteratedPageRank::new(&graph, &config.iterated())
        .and_then(|mut ipr| ipr.calc(&start))
        .context("iteration failed")?;
    info!(iterations = iterated.iterations, "ranking finished");

    let corpus = cli.corpus.display().to_string();
    let report = Report {
        corpus: &corpus,
        samples: sampled.samples,
        sampled: sampled.page_rank(),
        iterated: iterated.page_rank(),
    };
    print!("{report}");
    Ok(())
}
