use crate::domain::{
    advanced_results::{
        ports::Collection,
        value_objects::{ListQuery, Pagination, Populate, QueryRequest, ResultEnvelope},
    },
    common::entities::app_errors::CoreError,
};

/// Runs a listing request against `collection`.
///
/// The total is counted over the same filter as the page fetch, and the two
/// store calls happen in that order. Malformed control parameters never fail
/// here; only store errors are returned.
pub async fn advanced_results<C>(
    collection: &C,
    query: QueryRequest,
    populate: Option<Populate>,
) -> Result<ResultEnvelope, CoreError>
where
    C: Collection,
{
    let filter = query.filter_spec();
    let (page, limit) = query.window();

    let total = collection.count(filter.clone()).await?;
    let pagination = Pagination::compute(page, limit, total);

    let list_query = ListQuery {
        filter,
        select: query.select(),
        sort: query.sort(),
        skip: pagination.start_index(),
        limit: Some(limit),
        populate,
    };

    let items = collection.find(list_query).await?;

    Ok(ResultEnvelope::new(
        collection.model_name(),
        items,
        pagination,
    ))
}
