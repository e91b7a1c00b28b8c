use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize + PartialEq> {
    OK(T),
    Created(T),
}

impl<T: Serialize + PartialEq> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created(body) => (StatusCode::CREATED, Json(body)).into_response(),
        }
    }
}

/// `{"success": true, "data": ...}`
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Serialises as `{}`; the payload of deletions.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Empty {}

/// Listing envelope as documented; the resource key varies per route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingResponse {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Value,
}

/// Plain per-bootcamp list: `{"count": n, "<resource>": [...]}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CountedList {
    pub count: usize,
    #[serde(flatten)]
    pub items: serde_json::Map<String, Value>,
}

impl CountedList {
    pub fn new(resource: &str, items: Vec<Value>) -> Self {
        let count = items.len();
        let mut map = serde_json::Map::new();
        map.insert(resource.to_string(), Value::Array(items));
        Self { count, items: map }
    }
}
