// Integration tests for RegisterScout

use register_scout::core::{compute_distance_km, ProspectRanker};
use register_scout::models::{GeoPoint, Query};
use register_scout::services::{Gazetteer, RegistrySource, StaticRegistry};

async fn fixture_candidates(center: &GeoPoint, radius_km: f64) -> Vec<register_scout::models::Candidate> {
    let source = RegistrySource::Static(StaticRegistry::new());
    source.fetch_candidates(center, radius_km).await.unwrap()
}

#[tokio::test]
async fn test_end_to_end_search_around_aachen() {
    let gazetteer = Gazetteer::new();
    let ranker = ProspectRanker::new();

    let center = gazetteer.resolve("Aachen").unwrap();
    let candidates = fixture_candidates(&center, 50.0).await;
    let report = ranker.rank(&Query::new(center, 50.0), &candidates).unwrap();

    // Only the Köln company (~63km) sits outside 50km of Aachen; the rest
    // of the fixture, Düren (~28km) included, is in range.
    assert_eq!(report.total_candidates, 7);
    assert!(!report.prospects.is_empty());
    assert!(report.prospects.len() < 7);

    // Ordered by score descending
    for window in report.prospects.windows(2) {
        assert!(window[0].score >= window[1].score);
    }

    // Westfalen Logistics (score 94) leads the Aachen region ranking
    assert_eq!(report.prospects[0].name, "Westfalen Logistics AG");

    // Every reported distance is within the radius at full precision
    for prospect in &report.prospects {
        assert!(prospect.distance_km <= 50.0);
        let recomputed = compute_distance_km(&center, &prospect.location);
        assert_eq!(prospect.distance_km, recomputed);
    }
}

#[tokio::test]
async fn test_radius_widening_never_drops_prospects() {
    let gazetteer = Gazetteer::new();
    let ranker = ProspectRanker::new();
    let center = gazetteer.resolve("Aachen").unwrap();
    let candidates = fixture_candidates(&center, 1000.0).await;

    let mut previous: Vec<String> = vec![];
    for radius in [5.0, 15.0, 30.0, 60.0, 120.0, 700.0] {
        let report = ranker.rank(&Query::new(center, radius), &candidates).unwrap();
        let ids: Vec<String> = report.prospects.iter().map(|p| p.id.clone()).collect();
        for id in &previous {
            assert!(ids.contains(id), "{} dropped at radius {}", id, radius);
        }
        previous = ids;
    }
}

#[tokio::test]
async fn test_search_from_berlin_finds_nothing_nearby() {
    let gazetteer = Gazetteer::new();
    let ranker = ProspectRanker::new();
    let center = gazetteer.resolve("Berlin").unwrap();
    let candidates = fixture_candidates(&center, 50.0).await;

    // Fixture companies all sit in the Aachen/Köln region, ~480km away.
    // No match is a valid empty result, not an error.
    let report = ranker.rank(&Query::new(center, 50.0), &candidates).unwrap();
    assert!(report.prospects.is_empty());
    assert_eq!(report.total_candidates, 7);
}

#[tokio::test]
async fn test_search_from_cologne_ranks_local_media_group_first() {
    let gazetteer = Gazetteer::new();
    let ranker = ProspectRanker::new();
    let center = gazetteer.resolve("Köln").unwrap();
    let candidates = fixture_candidates(&center, 10.0).await;

    let report = ranker.rank(&Query::new(center, 10.0), &candidates).unwrap();

    assert_eq!(report.prospects.len(), 1);
    assert_eq!(report.prospects[0].name, "Rheinland Media Group");
}

#[tokio::test]
async fn test_ranked_output_keeps_register_payload() {
    let gazetteer = Gazetteer::new();
    let ranker = ProspectRanker::new();
    let center = gazetteer.resolve("Aachen").unwrap();
    let candidates = fixture_candidates(&center, 50.0).await;

    let report = ranker.rank(&Query::new(center, 50.0), &candidates).unwrap();

    for prospect in &report.prospects {
        let original = candidates.iter().find(|c| c.id == prospect.id).unwrap();
        assert_eq!(prospect.details, original.details);
        assert_eq!(prospect.name, original.name);
        assert_eq!(prospect.score, original.score);
    }
}
