use serde_json::Value;

use crate::domain::{
    advanced_results::value_objects::{FilterSpec, ListQuery},
    common::entities::app_errors::CoreError,
};

/// A queryable collection of documents.
///
/// Implementations decide how unknown fields behave: projections silently
/// drop them, filters on them match nothing.
#[cfg_attr(test, mockall::automock)]
pub trait Collection: Send + Sync {
    /// Logical model name, e.g. `Bootcamp`.
    fn model_name(&self) -> &'static str;

    fn count(&self, filter: FilterSpec) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;
}
