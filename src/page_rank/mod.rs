mod traits;
pub use self::traits::*;
pub mod iterated;
pub use self::iterated::{iterate_rank, iterate_rank_with, IteratedPageRank};
pub mod sampled;
pub use self::sampled::{sample_rank, SampledPageRank};
pub mod transition;
pub use self::transition::{transition, TransitionDistribution};

use self::transition::{pick_by_cdf, transition_from};
use crate::{common::Weights, Error, LinkGraph, RankVector};

/// Resolves `start` onto the pages of `graph` and scales it to sum to 1.
fn start_weights(graph: &LinkGraph, start: &RankVector) -> crate::Result<Weights> {
    if let Some((page, w)) = start.iter().find(|(_, w)| !(w.is_finite() && *w >= 0.0)) {
        return Err(Error::InvalidStart(format!("{page} has weight {w}")));
    }
    let mut weights = start.to_weights(graph);
    let total = crate::common::normalize(&mut weights);
    if total > 0.0 {
        Ok(weights)
    } else {
        Err(Error::InvalidStart(
            "no weight on any page of the graph".to_string(),
        ))
    }
}
