use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::core::distance::bounding_box;
use crate::models::{Candidate, CompanyDetails, CompanyStatus, GeoPoint};

/// Errors that can occur when fetching candidates from a register source
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// A candidate source for the ranking pipeline.
///
/// The core places no constraint on provenance, only on the Candidate
/// shape, so the source is injected: a built-in fixture for demos and
/// tests, or an HTTP client against a commercial register API.
pub enum RegistrySource {
    Static(StaticRegistry),
    Http(RegistryClient),
}

impl RegistrySource {
    /// Fetch candidates around a center point.
    ///
    /// The radius here only scopes the fetch (via a bounding box for the
    /// HTTP source); the exact inclusive-radius filter happens in the
    /// ranker afterwards.
    pub async fn fetch_candidates(
        &self,
        center: &GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<Candidate>, RegistryError> {
        match self {
            RegistrySource::Static(registry) => Ok(registry.companies()),
            RegistrySource::Http(client) => client.query_companies(center, radius_km).await,
        }
    }
}

/// Built-in sample register extract.
///
/// Seven companies around the Aachen/Köln region, mirroring a small
/// Handelsregister slice. Scores are externally assigned lead values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRegistry;

impl StaticRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn companies(&self) -> Vec<Candidate> {
        vec![
            company(
                "HRB-10001",
                "AixTech Solutions GmbH",
                "Aachen",
                50.7760,
                6.0840,
                "Software",
                25_000,
                12,
                2019,
                CompanyStatus::Active,
                vec![1.2, 1.5, 2.1, 2.8],
                88.0,
            ),
            company(
                "HRB-10002",
                "Westfalen Logistics AG",
                "Eschweiler",
                50.8200,
                6.2600,
                "Logistics",
                150_000,
                120,
                2005,
                CompanyStatus::Active,
                vec![15.0, 16.0, 15.5, 18.0],
                94.0,
            ),
            company(
                "HRB-10003",
                "Euregio Handwerk UG",
                "Stolberg",
                50.7667,
                6.2333,
                "Construction",
                1_000,
                4,
                2021,
                CompanyStatus::Liquidation,
                vec![0.4, 0.3, 0.1, 0.0],
                25.0,
            ),
            company(
                "HRB-10004",
                "Rheinland Media Group",
                "Köln",
                50.9300,
                6.9500,
                "Marketing",
                50_000,
                45,
                2010,
                CompanyStatus::Active,
                vec![4.5, 4.8, 5.2, 6.0],
                76.0,
            ),
            company(
                "HRB-10005",
                "Future Mobility Systems",
                "Aachen",
                50.7800,
                6.0700,
                "Automotive",
                55_000,
                30,
                2018,
                CompanyStatus::Active,
                vec![2.0, 3.5, 5.0, 8.2],
                91.0,
            ),
            company(
                "HRB-10006",
                "Düren Paper Mill",
                "Düren",
                50.8000,
                6.4800,
                "Manufacturing",
                500_000,
                200,
                1985,
                CompanyStatus::Active,
                vec![25.0, 24.0, 26.0, 27.0],
                82.0,
            ),
            company(
                "HRB-10007",
                "Startup Hero GmbH",
                "Herzogenrath",
                50.8667,
                6.1000,
                "Tech",
                25_000,
                8,
                2022,
                CompanyStatus::Active,
                vec![0.1, 0.5, 0.8, 1.2],
                65.0,
            ),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    city: &str,
    lat: f64,
    lon: f64,
    industry: &str,
    capital_eur: u64,
    employees: u32,
    founded: u16,
    status: CompanyStatus,
    revenue_history: Vec<f64>,
    score: f64,
) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        location: GeoPoint::new(lat, lon),
        score,
        details: CompanyDetails {
            city: city.to_string(),
            industry: industry.to_string(),
            capital_eur,
            employees,
            founded,
            status,
            revenue_history,
        },
    }
}

/// HTTP client for an external commercial register API
///
/// Queries company documents scoped to a bounding box around the search
/// center and parses them into Candidates. Rows that fail to parse are
/// skipped rather than failing the whole fetch.
pub struct RegistryClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl RegistryClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    /// Query companies around a center point.
    ///
    /// The bounding box is a coarse pre-filter that keeps the remote
    /// result set small; the ranker applies the exact radius afterwards.
    pub async fn query_companies(
        &self,
        center: &GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<Candidate>, RegistryError> {
        let bbox = bounding_box(center, radius_km);

        let filters = vec![
            format!("lat>={}", bbox.min_lat),
            format!("lat<={}", bbox.max_lat),
            format!("lon>={}", bbox.min_lon),
            format!("lon<={}", bbox.max_lon),
        ];
        let filters_json = serde_json::to_string(&filters)
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;
        let encoded_filters = urlencoding::encode(&filters_json);

        let url = format!(
            "{}/v1/companies?filters={}",
            self.base_url.trim_end_matches('/'),
            encoded_filters
        );

        tracing::debug!("Querying register companies from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RegistryError::ApiError(format!(
                "Failed to query companies: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("companies")
            .and_then(|d| d.as_array())
            .ok_or_else(|| RegistryError::InvalidResponse("Missing companies array".into()))?;

        let candidates: Vec<Candidate> = documents
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .collect();

        tracing::debug!("Register returned {} parsable companies", candidates.len());

        Ok(candidates)
    }
}
