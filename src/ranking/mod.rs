// Ranking — blending both similarity signals into one recommendation list.

pub mod hybrid;

pub use hybrid::{HybridRanker, Recommendation};
