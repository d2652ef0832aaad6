use algograph::graph::VertexId;
use std::collections::HashMap;

pub(crate) type Weights = HashMap<VertexId, f64, ahash::RandomState>;

pub(crate) fn total(v: &Weights) -> f64 {
    v.values().sum()
}

/// Scales `v` in place so that its entries sum to 1. Returns the sum before
/// scaling.
pub(crate) fn normalize(v: &mut Weights) -> f64 {
    let sum = total(v);
    if sum > 0.0 {
        for x in v.values_mut() {
            *x /= sum;
        }
    }
    sum
}

/// Largest absolute per-vertex difference. Vertices missing from one side
/// count as zero there.
pub(crate) fn max_abs_diff(a: &Weights, b: &Weights) -> f64 {
    let one_way = |x: &Weights, y: &Weights| {
        x.iter()
            .map(|(k, vx)| (vx - y.get(k).copied().unwrap_or(0.0)).abs())
            .fold(0.0, f64::max)
    };
    one_way(a, b).max(one_way(b, a))
}
