//! RegisterScout - Geospatial prospect ranking for commercial register data
//!
//! This library provides the ranking core used by the RegisterScout service:
//! given a center point, a radius and a set of business candidates, it
//! computes great-circle distances, filters by radius and orders the result
//! by desirability score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_distance_km, haversine_distance, InvalidQuery, ProspectRanker, RankReport};
pub use crate::models::{Candidate, GeoPoint, Query, RankProspectsRequest, RankProspectsResponse, RankedCandidate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let aachen = GeoPoint::new(50.7753, 6.0839);
        assert!(compute_distance_km(&aachen, &aachen) < 1e-6);
    }
}
