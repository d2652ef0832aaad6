use crate::page_rank::{iterated, sampled};

/// Settings shared by a full analysis: both estimators run with the same
/// damping factor.
#[derive(Debug, Clone)]
pub struct RankConfig {
    pub damping: f64,
    pub samples: usize,
    pub threshold: f64,
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        let s = sampled::Config::default();
        let i = iterated::Config::default();
        Self {
            damping: s.damping,
            samples: s.samples,
            threshold: i.threshold,
            max_iterations: i.max_iterations,
        }
    }
}

impl RankConfig {
    pub fn sampled(&self) -> sampled::Config {
        sampled::Config {
            damping: self.damping,
            samples: self.samples,
        }
    }

    pub fn iterated(&self) -> iterated::Config {
        iterated::Config {
            damping: self.damping,
            threshold: self.threshold,
            max_iterations: self.max_iterations,
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.sampled().validate()?;
        self.iterated().validate()
    }
}
