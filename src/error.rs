use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("sample count must be positive, got {0}")]
    InvalidSampleCount(usize),

    #[error("convergence threshold must be finite and positive, got {0}")]
    InvalidThreshold(f64),

    #[error("iteration cap must be positive, got {0}")]
    InvalidIterationCap(usize),

    #[error("invalid start vector: {0}")]
    InvalidStart(String),

    #[error("page not in graph: {0}")]
    UnknownPage(String),

    #[error("no convergence after {iterations} passes (max change {max_delta:e})")]
    ConvergenceFailure { iterations: usize, max_delta: f64 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidDamping(damping))
    }
}
