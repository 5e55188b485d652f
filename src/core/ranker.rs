use std::cmp::Ordering;

use thiserror::Error;

use crate::core::distance::compute_distance_km;
use crate::models::{Candidate, Query, RankedCandidate};

/// Raised for structurally invalid query parameters.
///
/// Everything else is handled without error: implausible candidate data
/// simply filters to an empty or partial result.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidQuery {
    #[error("radius must be a non-negative number of kilometers, got {0}")]
    NegativeRadius(f64),

    #[error("center coordinates out of range: ({latitude}, {longitude})")]
    CenterOutOfRange { latitude: f64, longitude: f64 },
}

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankReport {
    pub prospects: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Ranks candidates around a query center.
///
/// # Pipeline
/// 1. Validate the query (radius, center coordinate ranges)
/// 2. Annotate each candidate with its Haversine distance to the center
/// 3. Retain candidates within the radius (inclusive boundary)
/// 4. Sort by score descending; ties keep input order
#[derive(Debug, Clone, Copy, Default)]
pub struct ProspectRanker;

impl ProspectRanker {
    pub fn new() -> Self {
        Self
    }

    /// Rank the given candidates against the query.
    ///
    /// The input slice is never mutated; duplicates are not deduplicated,
    /// each entry is processed independently. An empty input or an empty
    /// in-radius set yields an empty report, not an error.
    ///
    /// # Errors
    /// [`InvalidQuery`] when the radius is negative (or not a number) or
    /// the center coordinates are out of range.
    pub fn rank(
        &self,
        query: &Query,
        candidates: &[Candidate],
    ) -> Result<RankReport, InvalidQuery> {
        // Also rejects NaN, which fails every comparison
        if !(query.radius_km >= 0.0) {
            return Err(InvalidQuery::NegativeRadius(query.radius_km));
        }
        if !query.center.in_range() {
            return Err(InvalidQuery::CenterOutOfRange {
                latitude: query.center.latitude,
                longitude: query.center.longitude,
            });
        }

        let total_candidates = candidates.len();

        let mut prospects: Vec<RankedCandidate> = candidates
            .iter()
            .map(|candidate| {
                let distance_km = compute_distance_km(&query.center, &candidate.location);
                RankedCandidate::from_candidate(candidate, distance_km)
            })
            // Inclusive boundary: a candidate exactly at the radius passes.
            // Full-precision distance, no display rounding here.
            .filter(|ranked| ranked.distance_km <= query.radius_km)
            .collect();

        // Vec::sort_by is stable, so equal scores keep their input order.
        // Downstream pagination relies on that tie-break.
        prospects.sort_by(|a, b| {
            b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
        });

        Ok(RankReport {
            prospects,
            total_candidates,
        })
    }
}
