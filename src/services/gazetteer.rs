use crate::models::GeoPoint;

/// Resolves city names to coordinates.
///
/// The core accepts a resolved GeoPoint only; this collaborator does the
/// name lookup for the search endpoint. Seeded with the cities the demo
/// register covers. An unknown city is a `None`, never an error.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    cities: Vec<(String, GeoPoint)>,
}

impl Gazetteer {
    /// Gazetteer with the built-in city table
    pub fn new() -> Self {
        Self {
            cities: vec![
                ("Aachen".to_string(), GeoPoint::new(50.7753, 6.0839)),
                ("Köln".to_string(), GeoPoint::new(50.9375, 6.9603)),
                ("Düsseldorf".to_string(), GeoPoint::new(51.2277, 6.7735)),
                ("Berlin".to_string(), GeoPoint::new(52.5200, 13.4050)),
            ],
        }
    }

    /// Case-insensitive lookup of a city's center point
    pub fn resolve(&self, city: &str) -> Option<GeoPoint> {
        let needle = city.trim().to_lowercase();
        self.cities
            .iter()
            .find(|(name, _)| name.to_lowercase() == needle)
            .map(|(_, point)| *point)
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_city() {
        let gazetteer = Gazetteer::new();
        let aachen = gazetteer.resolve("Aachen").unwrap();
        assert!((aachen.latitude - 50.7753).abs() < 1e-9);
        assert!((aachen.longitude - 6.0839).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let gazetteer = Gazetteer::new();
        assert!(gazetteer.resolve("berlin").is_some());
        assert!(gazetteer.resolve("  KÖLN ").is_some());
    }

    #[test]
    fn test_resolve_unknown_city_is_none() {
        let gazetteer = Gazetteer::new();
        assert!(gazetteer.resolve("Atlantis").is_none());
    }

    #[test]
    fn test_city_names_lists_the_table() {
        let gazetteer = Gazetteer::new();
        assert_eq!(
            gazetteer.city_names(),
            vec!["Aachen", "Köln", "Düsseldorf", "Berlin"]
        );
    }
}
