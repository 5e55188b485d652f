// Criterion benchmarks for RegisterScout

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use register_scout::core::{bounding_box, haversine_distance, ProspectRanker};
use register_scout::models::{Candidate, CompanyDetails, CompanyStatus, GeoPoint, Query};

fn create_candidate(id: usize, lat: f64, lon: f64) -> Candidate {
    Candidate {
        id: format!("HRB-{}", 10_000 + id),
        name: format!("Company {}", id),
        location: GeoPoint::new(lat, lon),
        score: (id % 100) as f64,
        details: CompanyDetails {
            city: "Aachen".to_string(),
            industry: "Software".to_string(),
            capital_eur: 25_000,
            employees: 10 + (id % 50) as u32,
            founded: 1990 + (id % 30) as u16,
            status: CompanyStatus::Active,
            revenue_history: vec![1.0, 1.5, 2.0, 2.5],
        },
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(50.7753),
                black_box(6.0839),
                black_box(50.7760),
                black_box(6.0840),
            )
        });
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    let center = GeoPoint::new(50.7753, 6.0839);
    c.bench_function("bounding_box_calculation", |b| {
        b.iter(|| bounding_box(black_box(&center), black_box(50.0)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = ProspectRanker::new();
    let query = Query::new(GeoPoint::new(50.7753, 6.0839), 50.0);

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_candidate(i, 50.7753 + lat_offset, 6.0839 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(candidate_count),
            &candidates,
            |b, candidates| {
                b.iter(|| ranker.rank(black_box(&query), black_box(candidates)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_bounding_box,
    bench_ranking
);
criterion_main!(benches);
