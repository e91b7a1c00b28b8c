use std::collections::HashMap;
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use devcamper_core::domain::advanced_results::value_objects::QueryRequest;
use tracing::debug;
use utoipa::IntoParams;

/// Documented control parameters of listing routes. Any other parameter is a
/// filter, written `field=value` or `field[gt|gte|lt|lte|in]=value`.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct ListingParams {
    /// Comma separated fields to return; `id` is always included.
    pub select: Option<String>,
    /// Comma separated fields, `-` prefix for descending. Defaults to `-created_at`.
    pub sort: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<u64>,
    /// Page size, default 25.
    pub limit: Option<u64>,
}

/// Raw listing parameters (`select`, `sort`, `page`, `limit`, filters such
/// as `average_cost[lte]=10000`). Never rejects: an undecodable query
/// string yields an empty request.
#[derive(Debug, Clone)]
pub struct QueryRequestExtractor(pub QueryRequest);

impl<S> FromRequestParts<S> for QueryRequestExtractor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> = serde_urlencoded::from_str(query_string)
            .unwrap_or_else(|err| {
                debug!("ignoring undecodable query string: {err}");
                HashMap::new()
            });

        Ok(QueryRequestExtractor(QueryRequest::from(query_map)))
    }
}
