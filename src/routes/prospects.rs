use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{InvalidQuery, ProspectRanker};
use crate::models::{
    ErrorResponse, HealthResponse, Query, RankProspectsRequest, RankProspectsResponse,
    SearchProspectsRequest,
};
use crate::services::{Gazetteer, RegistrySource};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RegistrySource>,
    pub gazetteer: Gazetteer,
    pub ranker: ProspectRanker,
    pub default_radius_km: f64,
    pub default_limit: u16,
    pub max_limit: u16,
}

impl AppState {
    /// Effective radius and limit for a search request: configured
    /// defaults fill omitted fields, the limit is capped
    fn search_params(&self, req: &SearchProspectsRequest) -> (f64, usize) {
        let radius_km = req.radius_km.unwrap_or(self.default_radius_km);
        let limit = req.limit.unwrap_or(self.default_limit).min(self.max_limit) as usize;
        (radius_km, limit)
    }
}

/// Configure all prospect-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/prospects/rank", web::post().to(rank_prospects))
        .route("/prospects/search", web::post().to(search_prospects));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn invalid_query_response(err: InvalidQuery) -> HttpResponse {
    // A bad query is distinguishable from an empty result: the former is
    // a 400 with an error body, the latter a 200 with an empty list.
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_query".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Rank an explicit candidate list
///
/// POST /api/v1/prospects/rank
///
/// Request body:
/// ```json
/// {
///   "center": { "latitude": 50.7753, "longitude": 6.0839 },
///   "radiusKm": 50,
///   "candidates": [ ... ]
/// }
/// ```
async fn rank_prospects(
    state: web::Data<AppState>,
    req: web::Json<RankProspectsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_prospects request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let query = Query::new(req.center, req.radius_km);

    tracing::info!(
        "Ranking {} candidates around ({}, {}) within {} km",
        req.candidates.len(),
        query.center.latitude,
        query.center.longitude,
        query.radius_km
    );

    match state.ranker.rank(&query, &req.candidates) {
        Ok(report) => HttpResponse::Ok().json(RankProspectsResponse {
            prospects: report.prospects,
            total_candidates: report.total_candidates,
        }),
        Err(err) => {
            tracing::info!("Rejected rank query: {}", err);
            invalid_query_response(err)
        }
    }
}

/// Search prospects around a named city using the configured source
///
/// POST /api/v1/prospects/search
///
/// Request body:
/// ```json
/// {
///   "city": "Aachen",
///   "radiusKm": 50,
///   "limit": 20
/// }
/// ```
async fn search_prospects(
    state: web::Data<AppState>,
    req: web::Json<SearchProspectsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let center = match state.gazetteer.resolve(&req.city) {
        Some(point) => point,
        None => {
            tracing::info!("Unknown city in search request: {}", req.city);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "unknown_city".to_string(),
                message: format!(
                    "No coordinates known for city '{}'. Known cities: {}",
                    req.city,
                    state.gazetteer.city_names().join(", ")
                ),
                status_code: 404,
            });
        }
    };

    let (radius_km, limit) = state.search_params(&req);

    let candidates = match state.registry.fetch_candidates(&center, radius_km).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch candidates for {}: {}", req.city, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Fetched {} candidates for {}", candidates.len(), req.city);

    let query = Query::new(center, radius_km);
    match state.ranker.rank(&query, &candidates) {
        Ok(report) => {
            let mut prospects = report.prospects;
            prospects.truncate(limit);

            tracing::info!(
                "Returning {} prospects for {} (from {} candidates)",
                prospects.len(),
                req.city,
                report.total_candidates
            );

            HttpResponse::Ok().json(RankProspectsResponse {
                prospects,
                total_candidates: report.total_candidates,
            })
        }
        Err(err) => {
            tracing::info!("Rejected search query: {}", err);
            invalid_query_response(err)
        }
    }
}
