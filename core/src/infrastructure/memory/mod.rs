//! In-process collection over JSON documents.
//!
//! Follows the same contract as the Postgres collections (projection always
//! keeps `id`, unknown fields never match, unknown projections are dropped)
//! and backs the query-engine tests.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::domain::{
    advanced_results::{
        ports::Collection,
        value_objects::{
            FilterCondition, FilterOperator, FilterSpec, ListQuery, Populate, SortDirection,
            SortSpec,
        },
    },
    common::entities::app_errors::CoreError,
};

const ID_FIELD: &str = "id";

#[derive(Debug, Clone)]
pub struct InMemoryRelation {
    local_key: String,
    foreign_key: String,
    documents: Vec<Value>,
    many: bool,
}

impl InMemoryRelation {
    /// `document[local_key]` references a single `related[foreign_key]`.
    pub fn one(local_key: &str, foreign_key: &str, documents: Vec<Value>) -> Self {
        Self {
            local_key: local_key.to_string(),
            foreign_key: foreign_key.to_string(),
            documents,
            many: false,
        }
    }

    /// Every related document whose `foreign_key` equals `document[local_key]`.
    pub fn many(local_key: &str, foreign_key: &str, documents: Vec<Value>) -> Self {
        Self {
            local_key: local_key.to_string(),
            foreign_key: foreign_key.to_string(),
            documents,
            many: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryCollection {
    model_name: &'static str,
    documents: Vec<Value>,
    relations: HashMap<String, InMemoryRelation>,
}

impl InMemoryCollection {
    pub fn new(model_name: &'static str, documents: Vec<Value>) -> Self {
        Self {
            model_name,
            documents,
            relations: HashMap::new(),
        }
    }

    pub fn with_relation(mut self, path: &str, relation: InMemoryRelation) -> Self {
        self.relations.insert(path.to_string(), relation);
        self
    }

    fn matching(&self, filter: &FilterSpec) -> Vec<&Value> {
        self.documents
            .iter()
            .filter(|doc| filter.conditions.iter().all(|cond| matches(doc, cond)))
            .collect()
    }

    /// Related value of `source` under `populate`. Reads the local key from
    /// the stored document so a projection without it still links.
    fn related(&self, source: &Value, populate: &Populate) -> Option<Value> {
        let relation = self.relations.get(&populate.path)?;
        let local = source.get(&relation.local_key)?;

        let mut related = relation
            .documents
            .iter()
            .filter(|r| r.get(&relation.foreign_key) == Some(local))
            .map(|r| project(r, populate.select.as_deref()));

        Some(if relation.many {
            Value::Array(related.collect())
        } else {
            related.next().unwrap_or(Value::Null)
        })
    }
}

impl Collection for InMemoryCollection {
    fn model_name(&self) -> &'static str {
        self.model_name
    }

    async fn count(&self, filter: FilterSpec) -> Result<u64, CoreError> {
        Ok(self.matching(&filter).len() as u64)
    }

    async fn find(&self, query: ListQuery) -> Result<Vec<Value>, CoreError> {
        let mut documents = self.matching(&query.filter);
        documents.sort_by(|a, b| compare_documents(a, b, &query.sort));

        let limit = query.limit.unwrap_or(u64::MAX) as usize;
        let page = documents
            .into_iter()
            .skip(query.skip as usize)
            .take(limit)
            .map(|doc| {
                let mut projected = project(doc, query.select.as_deref());
                let inlined = query
                    .populate
                    .as_ref()
                    .and_then(|populate| Some((populate, self.related(doc, populate)?)));
                if let (Some((populate, value)), Some(object)) =
                    (inlined, projected.as_object_mut())
                {
                    object.insert(populate.path.clone(), value);
                }
                projected
            })
            .collect();

        Ok(page)
    }
}

fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| current.get(segment))
}

fn matches(document: &Value, condition: &FilterCondition) -> bool {
    let Some(value) = lookup(document, &condition.field) else {
        return false;
    };

    match condition.operator {
        FilterOperator::Eq => scalar_or_any(value, |v| compare_raw(v, &condition.value) == Some(Ordering::Equal)),
        FilterOperator::Gt => scalar_or_any(value, |v| compare_raw(v, &condition.value) == Some(Ordering::Greater)),
        FilterOperator::Gte => scalar_or_any(value, |v| {
            matches!(compare_raw(v, &condition.value), Some(Ordering::Greater | Ordering::Equal))
        }),
        FilterOperator::Lt => scalar_or_any(value, |v| compare_raw(v, &condition.value) == Some(Ordering::Less)),
        FilterOperator::Lte => scalar_or_any(value, |v| {
            matches!(compare_raw(v, &condition.value), Some(Ordering::Less | Ordering::Equal))
        }),
        FilterOperator::In => condition.list_values().iter().any(|raw| {
            scalar_or_any(value, |v| compare_raw(v, raw) == Some(Ordering::Equal))
        }),
    }
}

/// Arrays match when any element does.
fn scalar_or_any(value: &Value, predicate: impl Fn(&Value) -> bool) -> bool {
    match value {
        Value::Array(items) => items.iter().any(predicate),
        other => predicate(other),
    }
}

/// Compares a stored value with a raw query-string value, coercing the raw
/// side to the stored type. Uncoercible values compare as `None`.
fn compare_raw(value: &Value, raw: &str) -> Option<Ordering> {
    match value {
        Value::Number(n) => n.as_f64()?.partial_cmp(&raw.parse::<f64>().ok()?),
        Value::String(s) => Some(s.as_str().cmp(raw)),
        Value::Bool(b) => Some(b.cmp(&raw.parse::<bool>().ok()?)),
        _ => None,
    }
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(_) => 4,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn compare_documents(a: &Value, b: &Value, sort: &[SortSpec]) -> Ordering {
    for spec in sort {
        let ordering = compare_values(lookup(a, &spec.field), lookup(b, &spec.field));
        let ordering = match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn project(document: &Value, select: Option<&[String]>) -> Value {
    let (Some(fields), Some(object)) = (select, document.as_object()) else {
        return document.clone();
    };

    let mut projected = Map::new();
    if let Some(id) = object.get(ID_FIELD) {
        projected.insert(ID_FIELD.to_string(), id.clone());
    }
    for field in fields {
        if let Some(value) = object.get(field) {
            projected.insert(field.clone(), value.clone());
        }
    }
    Value::Object(projected)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn bootcamps() -> InMemoryCollection {
        InMemoryCollection::new(
            "Bootcamp",
            vec![
                json!({"id": "b1", "name": "Devworks", "careers": ["Web Development", "UI/UX"], "housing": true, "average_cost": 10000, "created_at": "2024-01-01T00:00:00Z"}),
                json!({"id": "b2", "name": "ModernTech", "careers": ["Business"], "housing": false, "average_cost": 7500, "created_at": "2024-01-02T00:00:00Z"}),
                json!({"id": "b3", "name": "Codemasters", "careers": ["Data Science", "Business"], "housing": false, "created_at": "2024-01-03T00:00:00Z"}),
            ],
        )
    }

    async fn find_ids(collection: &InMemoryCollection, filter: FilterSpec) -> Vec<String> {
        collection
            .find(ListQuery::matching(filter))
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn array_fields_match_any_element() {
        let collection = bootcamps();
        let filter = FilterSpec::new().with_eq("careers", "Business");
        assert_eq!(find_ids(&collection, filter).await, vec!["b3", "b2"]);

        let filter = FilterSpec::new().and("careers", FilterOperator::In, "UI/UX,Data Science");
        assert_eq!(find_ids(&collection, filter).await, vec!["b3", "b1"]);
    }

    #[tokio::test]
    async fn booleans_and_numbers_are_coerced() {
        let collection = bootcamps();
        assert_eq!(
            find_ids(&collection, FilterSpec::new().with_eq("housing", "true")).await,
            vec!["b1"]
        );
        assert_eq!(
            find_ids(
                &collection,
                FilterSpec::new().and("average_cost", FilterOperator::Lt, "9000")
            )
            .await,
            vec!["b2"]
        );
        assert!(
            find_ids(
                &collection,
                FilterSpec::new().and("average_cost", FilterOperator::Lt, "cheap")
            )
            .await
            .is_empty()
        );
    }

    #[tokio::test]
    async fn missing_values_sort_first_ascending() {
        let collection = bootcamps();
        let mut query = ListQuery::matching(FilterSpec::new());
        query.sort = vec![SortSpec::asc("average_cost")];

        let names: Vec<Value> = collection
            .find(query)
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc["name"].clone())
            .collect();
        assert_eq!(names, vec![json!("Codemasters"), json!("ModernTech"), json!("Devworks")]);
    }

    #[tokio::test]
    async fn populate_many_collects_children() {
        let courses = vec![
            json!({"id": "c1", "bootcamp_id": "b1", "title": "Front End"}),
            json!({"id": "c2", "bootcamp_id": "b1", "title": "Back End"}),
        ];
        let collection = bootcamps().with_relation("courses", InMemoryRelation::many("id", "bootcamp_id", courses));

        let query = ListQuery::matching(FilterSpec::new().with_eq("id", "b1"))
            .with_populate(Some(Populate::path("courses")));
        let found = collection.find(query).await.unwrap();

        assert_eq!(found[0]["courses"].as_array().unwrap().len(), 2);

        let query = ListQuery::matching(FilterSpec::new().with_eq("id", "b2"))
            .with_populate(Some(Populate::path("courses")));
        let found = collection.find(query).await.unwrap();
        assert_eq!(found[0]["courses"], json!([]));
    }

    #[tokio::test]
    async fn populate_links_through_unselected_key() {
        let reviews = InMemoryCollection::new(
            "Review",
            vec![json!({"id": "r1", "title": "solid", "bootcamp_id": "b1", "created_at": "2024-01-01T00:00:00Z"})],
        )
        .with_relation(
            "bootcamp",
            InMemoryRelation::one("bootcamp_id", "id", bootcamps().documents),
        );

        let mut query = ListQuery::matching(FilterSpec::new())
            .with_populate(Some(Populate::with_select("bootcamp", &["name"])));
        query.select = Some(vec!["title".to_string()]);

        let found = reviews.find(query).await.unwrap();
        assert_eq!(
            found,
            vec![json!({"id": "r1", "title": "solid", "bootcamp": {"id": "b1", "name": "Devworks"}})]
        );
    }
}
