use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both coordinates are finite and within valid ranges
    /// (latitude in [-90, 90], longitude in [-180, 180])
    pub fn in_range(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Opaque register attributes carried alongside a candidate.
///
/// The ranking core never reads these fields; they pass through to the
/// output unchanged so downstream consumers can render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub city: String,
    pub industry: String,
    #[serde(rename = "capitalEur")]
    pub capital_eur: u64,
    pub employees: u32,
    pub founded: u16,
    pub status: CompanyStatus,
    /// Estimated yearly revenue series in million EUR, oldest first
    #[serde(rename = "revenueHistory", default)]
    pub revenue_history: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Active,
    Liquidation,
    Dissolved,
}

/// A business entity under evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    /// Externally supplied desirability score; higher is more desirable.
    /// The core ranks by it but never derives it.
    pub score: f64,
    pub details: CompanyDetails,
}

/// A candidate annotated with its distance to the query center.
///
/// `distance_km` keeps full floating-point precision; only presentation
/// should round (see [`RankedCandidate::display_distance_km`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    pub score: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub details: CompanyDetails,
}

impl RankedCandidate {
    pub fn from_candidate(candidate: &Candidate, distance_km: f64) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            location: candidate.location,
            score: candidate.score,
            distance_km,
            details: candidate.details.clone(),
        }
    }

    /// Distance rounded to one decimal place, for display only.
    /// Filtering and sorting always use the full-precision value.
    pub fn display_distance_km(&self) -> f64 {
        (self.distance_km * 10.0).round() / 10.0
    }
}

/// A ranking query: center point and search radius
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Query {
    pub center: GeoPoint,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
}

impl Query {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geopoint_range_check() {
        assert!(GeoPoint::new(50.7753, 6.0839).in_range());
        assert!(GeoPoint::new(-90.0, 180.0).in_range());
        assert!(!GeoPoint::new(91.0, 0.0).in_range());
        assert!(!GeoPoint::new(0.0, -180.5).in_range());
        assert!(!GeoPoint::new(f64::NAN, 0.0).in_range());
    }

    #[test]
    fn test_display_distance_rounds_to_one_decimal() {
        let candidate = Candidate {
            id: "1".to_string(),
            name: "Test GmbH".to_string(),
            location: GeoPoint::new(50.0, 6.0),
            score: 80.0,
            details: CompanyDetails {
                city: "Aachen".to_string(),
                industry: "Software".to_string(),
                capital_eur: 25_000,
                employees: 10,
                founded: 2019,
                status: CompanyStatus::Active,
                revenue_history: vec![1.0, 2.0],
            },
        };

        let ranked = RankedCandidate::from_candidate(&candidate, 12.3456);
        assert_eq!(ranked.display_distance_km(), 12.3);
        // full precision retained internally
        assert_eq!(ranked.distance_km, 12.3456);
    }
}
