use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Candidate, GeoPoint};

/// Request to rank an explicit candidate list around a center point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankProspectsRequest {
    pub center: GeoPoint,
    #[serde(alias = "radius_km", rename = "radiusKm")]
    pub radius_km: f64,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Request to search prospects around a named city using the
/// configured candidate source.
///
/// Radius and limit fall back to the configured search defaults when
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchProspectsRequest {
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub limit: Option<u16>,
}
