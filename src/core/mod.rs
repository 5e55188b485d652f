// Core algorithm exports
pub mod distance;
pub mod ranker;

pub use distance::{bounding_box, compute_distance_km, haversine_distance};
pub use ranker::{InvalidQuery, ProspectRanker, RankReport};
