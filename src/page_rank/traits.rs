use crate::{RankVector, Result};

pub trait PageRank {
    type Result: PageRankResult;

    /// Runs the estimator from the distribution `start`. `start` need not be
    /// normalized; pages it does not mention start at zero.
    fn calc(&mut self, start: &RankVector) -> Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &RankVector;
    fn into_page_rank(self) -> RankVector;
}
