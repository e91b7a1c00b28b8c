use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};
use serde_json::Value;
use tracing::error;

use crate::domain::{
    advanced_results::value_objects::{FilterSpec, ListQuery},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::query::{
    condition::{apply_sort, build_condition},
    field_map::FieldMap,
};

/// Number of rows of `E` matching `filter`.
pub async fn count_matching<E>(
    db: &DatabaseConnection,
    fields: &FieldMap<E>,
    filter: &FilterSpec,
) -> Result<u64, CoreError>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    let condition = build_condition(filter, fields).map_err(|e| {
        error!("Failed to build filter for {}: {}", E::default().table_name(), e);
        CoreError::InternalServerError
    })?;

    E::find().filter(condition).count(db).await.map_err(|e| {
        error!("Failed to count {}: {}", E::default().table_name(), e);
        CoreError::InternalServerError
    })
}

/// One page of rows of `E` as JSON documents keyed by field name.
pub async fn find_documents<E>(
    db: &DatabaseConnection,
    fields: &FieldMap<E>,
    query: &ListQuery,
) -> Result<Vec<Value>, CoreError>
where
    E: EntityTrait,
{
    let condition = build_condition(&query.filter, fields).map_err(|e| {
        error!("Failed to build filter for {}: {}", E::default().table_name(), e);
        CoreError::InternalServerError
    })?;

    let mut select = E::find().filter(condition).select_only();
    for field in fields.selection(query.select.as_deref()) {
        select = select.column_as(field.col, field.name);
    }
    select = apply_sort(select, &query.sort, fields)
        .offset(query.skip)
        .limit(query.limit);

    select.into_json().all(db).await.map_err(|e| {
        error!("Failed to fetch {}: {}", E::default().table_name(), e);
        CoreError::InternalServerError
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, Value as DbValue};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::infrastructure::user::mappers::user_fields;

    #[tokio::test]
    async fn projects_selected_columns_into_json() {
        let id = Uuid::from_u128(7);
        let row: BTreeMap<&str, DbValue> = [
            ("id", id.into()),
            ("name", "Kevin".into()),
            ("email", "kevin@gmail.com".into()),
        ]
        .into_iter()
        .collect();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let mut query = ListQuery::matching(FilterSpec::new()).with_limit(10);
        query.select = Some(vec!["name".into(), "email".into(), "password".into()]);
        query.skip = 20;

        let documents = find_documents(&db, &user_fields(), &query).await.unwrap();
        assert_eq!(
            documents,
            vec![json!({"id": id.to_string(), "name": "Kevin", "email": "kevin@gmail.com"})]
        );

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains(r#"AS \"email\""#), "{log}");
        assert!(!log.contains("password"), "{log}");
        assert!(!log.contains(r#"\"role\""#), "{log}");
        assert!(log.contains("LIMIT") && log.contains("OFFSET"), "{log}");
    }

    #[tokio::test]
    async fn uncoercible_filter_is_an_internal_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let filter = FilterSpec::new().with_eq("id", "not-a-uuid");

        let result = find_documents(&db, &user_fields(), &ListQuery::matching(filter)).await;
        assert_eq!(result, Err(CoreError::InternalServerError));
        assert!(db.into_transaction_log().is_empty());
    }
}
