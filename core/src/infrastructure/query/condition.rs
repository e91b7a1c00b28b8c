use sea_orm::{
    Condition, EntityTrait, QueryOrder, Select,
    sea_query::{Expr, Order, extension::postgres::PgBinOper},
};
use serde_json::json;

use crate::domain::advanced_results::value_objects::{
    FilterCondition, FilterOperator, FilterSpec, SortDirection, SortSpec,
};
use crate::infrastructure::query::field_map::{
    Field, FieldKind, FieldMap, QueryBuildError, QueryBuildResult, coerce,
};

/// AND of every condition. A field outside the whitelist makes the whole
/// filter match nothing instead of being ignored.
pub fn build_condition<E: EntityTrait>(
    filter: &FilterSpec,
    fields: &FieldMap<E>,
) -> QueryBuildResult<Condition> {
    filter
        .conditions
        .iter()
        .try_fold(Condition::all(), |acc, condition| {
            let expr = match fields.get(&condition.field) {
                Some(field) => field_condition(field, condition)?,
                None => match_nothing(),
            };
            Ok(acc.add(expr))
        })
}

fn match_nothing() -> Condition {
    Condition::all().add(Expr::cust("1=0"))
}

fn field_condition<E: EntityTrait>(
    field: &Field<E>,
    condition: &FilterCondition,
) -> QueryBuildResult<Condition> {
    if field.kind == FieldKind::StringList {
        return list_condition(field, condition);
    }

    let value = |raw: &str| coerce(field.name, field.kind, raw);
    let col = Expr::col(field.col);

    let expr = match condition.operator {
        FilterOperator::Eq => col.eq(value(&condition.value)?),
        FilterOperator::Gt => col.gt(value(&condition.value)?),
        FilterOperator::Gte => col.gte(value(&condition.value)?),
        FilterOperator::Lt => col.lt(value(&condition.value)?),
        FilterOperator::Lte => col.lte(value(&condition.value)?),
        FilterOperator::In => {
            let values = condition
                .list_values()
                .into_iter()
                .map(value)
                .collect::<QueryBuildResult<Vec<_>>>()?;
            if values.is_empty() {
                return Ok(match_nothing());
            }
            col.is_in(values)
        }
    };

    Ok(Condition::all().add(expr))
}

/// Equality on a JSON string array is containment; `in` matches arrays
/// sharing at least one element.
fn list_condition<E: EntityTrait>(
    field: &Field<E>,
    condition: &FilterCondition,
) -> QueryBuildResult<Condition> {
    let contains = |item: &str| Expr::col(field.col).binary(PgBinOper::Contains, json!([item]));

    match condition.operator {
        FilterOperator::Eq => Ok(Condition::all().add(contains(&condition.value))),
        FilterOperator::In => {
            let any = condition
                .list_values()
                .into_iter()
                .fold(Condition::any(), |acc, item| acc.add(contains(item)));
            if any.is_empty() {
                Ok(match_nothing())
            } else {
                Ok(any)
            }
        }
        operator => Err(QueryBuildError::UnsupportedOperator {
            field: field.name.to_string(),
            operator: format!("{operator:?}").to_lowercase(),
        }),
    }
}

/// Applies the requested order, skipping unknown fields, with `id` as the
/// final tie-breaker so pages never overlap.
pub fn apply_sort<E: EntityTrait>(
    mut select: Select<E>,
    sort: &[SortSpec],
    fields: &FieldMap<E>,
) -> Select<E> {
    for spec in sort {
        if let Some(field) = fields.get(&spec.field) {
            let order = match spec.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            select = select.order_by(field.col, order);
        }
    }

    if let Some(id) = fields.get("id") {
        select = select.order_by(id.col, Order::Asc);
    }

    select
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    use super::*;
    use crate::domain::advanced_results::value_objects::QueryRequest;
    use crate::entity::bootcamps;

    fn fields() -> FieldMap<bootcamps::Entity> {
        FieldMap::new()
            .insert("id", bootcamps::Column::Id, FieldKind::Uuid)
            .insert("name", bootcamps::Column::Name, FieldKind::String)
            .insert("housing", bootcamps::Column::Housing, FieldKind::Bool)
            .insert("careers", bootcamps::Column::Careers, FieldKind::StringList)
            .insert("average_cost", bootcamps::Column::AverageCost, FieldKind::F64)
            .insert("created_at", bootcamps::Column::CreatedAt, FieldKind::DateTime)
    }

    fn where_sql(pairs: &[(&str, &str)]) -> QueryBuildResult<String> {
        let query: QueryRequest = pairs.iter().copied().collect();
        let condition = build_condition(&query.filter_spec(), &fields())?;

        Ok(bootcamps::Entity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string())
    }

    #[test]
    fn comparison_operators_compile_to_sql() {
        let sql = where_sql(&[("average_cost[lte]", "10000"), ("housing", "true")]).unwrap();

        assert!(sql.contains(r#""average_cost" <= 10000"#), "{sql}");
        assert!(sql.contains(r#""housing" = "#), "{sql}");
    }

    #[test]
    fn in_operator_builds_a_list() {
        let sql = where_sql(&[("name[in]", "Devworks,Codemasters")]).unwrap();

        assert!(sql.contains(r#""name" IN ('Devworks', 'Codemasters')"#), "{sql}");
    }

    #[test]
    fn careers_match_by_containment() {
        let sql = where_sql(&[("careers", "Business")]).unwrap();
        assert!(sql.contains(r#""careers" @>"#), "{sql}");

        let sql = where_sql(&[("careers[in]", "Business,UI/UX")]).unwrap();
        assert!(sql.contains(" OR "), "{sql}");
    }

    #[test]
    fn unknown_field_matches_nothing() {
        let sql = where_sql(&[("password", "secret")]).unwrap();

        assert!(sql.contains("1=0"), "{sql}");
        assert!(!sql.contains("secret"), "{sql}");
    }

    #[test]
    fn uncoercible_value_is_an_error() {
        let err = where_sql(&[("average_cost[gt]", "cheap")]).unwrap_err();

        assert!(matches!(err, QueryBuildError::InvalidValue { .. }));
    }

    #[test]
    fn ordering_on_a_list_field_is_rejected_for_ranges() {
        let err = where_sql(&[("careers[gt]", "A")]).unwrap_err();

        assert_eq!(
            err,
            QueryBuildError::UnsupportedOperator {
                field: "careers".to_string(),
                operator: "gt".to_string(),
            }
        );
    }

    #[test]
    fn sort_skips_unknown_fields_and_ends_with_id() {
        let sort = SortSpec::parse_list("-average_cost,bogus");
        let sql = apply_sort(bootcamps::Entity::find(), &sort, &fields())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(
            sql.ends_with(r#"ORDER BY "bootcamps"."average_cost" DESC, "bootcamps"."id" ASC"#),
            "{sql}"
        );
    }
}
