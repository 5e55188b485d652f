// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BoundingBox, Candidate, CompanyDetails, CompanyStatus, GeoPoint, Query, RankedCandidate};
pub use requests::{RankProspectsRequest, SearchProspectsRequest};
pub use responses::{ErrorResponse, HealthResponse, RankProspectsResponse};
