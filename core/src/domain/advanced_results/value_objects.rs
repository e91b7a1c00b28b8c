use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use utoipa::ToSchema;

/// Parameters that drive the listing itself and never become filters.
pub const CONTROL_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;
pub const DEFAULT_SORT_FIELD: &str = "created_at";
/// Largest OFFSET or LIMIT a store accepts (signed 64-bit).
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Comparison operator attached to a filter field.
///
/// `Eq` is the implicit operator of a bare `field=value` pair; the other five
/// are the only keywords recognised inside `field[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl FilterCondition {
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Values of an `in` condition, comma separated on the wire.
    pub fn list_values(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

/// All conditions are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub conditions: Vec<FilterCondition>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn and(mut self, field: impl Into<String>, operator: FilterOperator, value: impl Into<String>) -> Self {
        self.conditions
            .push(FilterCondition::new(field, operator, value));
        self
    }

    pub fn with_eq(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.and(field, FilterOperator::Eq, value)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Newest first.
    pub fn default_order() -> Vec<SortSpec> {
        vec![SortSpec::desc(DEFAULT_SORT_FIELD)]
    }

    /// Parse sort string like "field1,-field2 field3"
    pub fn parse_list(raw: &str) -> Vec<SortSpec> {
        split_fields(raw)
            .into_iter()
            .filter_map(|part| match part.strip_prefix('-') {
                Some("") => None,
                Some(field) => Some(SortSpec::desc(field)),
                None => Some(SortSpec::asc(part)),
            })
            .collect()
    }
}

/// Relation expansion requested by a route. Never built from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Populate {
    pub path: String,
    pub select: Option<Vec<String>>,
}

impl Populate {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            select: None,
        }
    }

    pub fn with_select(path: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            path: path.into(),
            select: Some(fields.iter().map(|f| f.to_string()).collect()),
        }
    }
}

/// Store-facing query assembled from a [`QueryRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: FilterSpec,
    pub select: Option<Vec<String>>,
    pub sort: Vec<SortSpec>,
    pub skip: u64,
    pub limit: Option<u64>,
    pub populate: Option<Populate>,
}

impl ListQuery {
    /// Every document matching `filter`, newest first, unpaginated.
    pub fn matching(filter: FilterSpec) -> Self {
        Self {
            filter,
            select: None,
            sort: SortSpec::default_order(),
            skip: 0,
            limit: None,
            populate: None,
        }
    }

    pub fn with_populate(mut self, populate: Option<Populate>) -> Self {
        self.populate = populate;
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Raw query-string parameters of a listing request.
///
/// Keys are kept ordered so that the derived filter is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    params: BTreeMap<String, String>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Non-control parameters, each classified as `field` or `field[op]`.
    pub fn filter_spec(&self) -> FilterSpec {
        let conditions = self
            .params
            .iter()
            .filter(|(key, _)| !CONTROL_KEYS.contains(&key.as_str()))
            .map(|(key, value)| {
                let (field, operator) = classify_key(key);
                FilterCondition::new(field, operator, value.clone())
            })
            .collect();

        FilterSpec { conditions }
    }

    /// `None` when absent or when nothing but separators was given.
    pub fn select(&self) -> Option<Vec<String>> {
        let fields = split_fields(self.get("select")?);
        if fields.is_empty() { None } else { Some(fields) }
    }

    pub fn sort(&self) -> Vec<SortSpec> {
        let sorts = self.get("sort").map(SortSpec::parse_list).unwrap_or_default();
        if sorts.is_empty() {
            SortSpec::default_order()
        } else {
            sorts
        }
    }

    pub fn page(&self) -> u64 {
        parse_positive(self.get("page")).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        parse_positive(self.get("limit")).unwrap_or(DEFAULT_LIMIT)
    }

    /// `(page, limit)` of the requested window. Falls back to the defaults
    /// when the first row of the page lies beyond [`MAX_WINDOW`].
    pub fn window(&self) -> (u64, u64) {
        let (page, limit) = (self.page(), self.limit());
        match (page - 1).checked_mul(limit) {
            Some(skip) if skip <= MAX_WINDOW => (page, limit),
            _ => (DEFAULT_PAGE, DEFAULT_LIMIT),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let params = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { params }
    }
}

impl From<HashMap<String, String>> for QueryRequest {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Splits `price[gte]` into (`price`, Gte). Anything that is not exactly one
/// of the five keywords keeps the whole key as a literal field name.
fn classify_key(key: &str) -> (String, FilterOperator) {
    if let Some(inner) = key.strip_suffix(']')
        && let Some(open) = inner.rfind('[')
        && open > 0
        && let Ok(operator) = inner[open + 1..].parse::<FilterOperator>()
    {
        return (inner[..open].to_string(), operator);
    }

    (key.to_string(), FilterOperator::Eq)
}

fn split_fields(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim()
        .parse::<u64>()
        .ok()
        .filter(|v| (1..=MAX_WINDOW).contains(v))
}

/// Pagination window and neighbours of a listing page.
///
/// Only `next`, `prev` and `limit` are part of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    #[serde(skip)]
    pub page: u64,
    pub limit: u64,
    #[serde(skip)]
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<u64>,
}

impl Pagination {
    pub fn compute(page: u64, limit: u64, total: u64) -> Self {
        let start_index = page.saturating_sub(1).saturating_mul(limit);
        let end_index = page.saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            next: (end_index < total).then_some(page + 1),
            prev: (start_index > 0).then(|| page - 1),
        }
    }

    pub fn start_index(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Uniform listing response. Serialises as
/// `{"success", "data": {"count", "pagination", "<resource>": [...]}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    pub success: bool,
    pub count: usize,
    pub pagination: Pagination,
    pub resource: String,
    pub items: Vec<Value>,
}

impl ResultEnvelope {
    pub fn new(model_name: &str, items: Vec<Value>, pagination: Pagination) -> Self {
        Self {
            success: true,
            count: items.len(),
            pagination,
            resource: model_name.to_lowercase(),
            items,
        }
    }
}

struct EnvelopeData<'a>(&'a ResultEnvelope);

impl Serialize for EnvelopeData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("count", &self.0.count)?;
        map.serialize_entry("pagination", &self.0.pagination)?;
        map.serialize_entry(&self.0.resource, &self.0.items)?;
        map.end()
    }
}

impl Serialize for ResultEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("success", &self.success)?;
        map.serialize_entry("data", &EnvelopeData(self))?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(pairs: &[(&str, &str)]) -> QueryRequest {
        pairs.iter().copied().collect()
    }

    #[test]
    fn control_keys_never_become_filters() {
        let query = request(&[
            ("select", "name"),
            ("sort", "-name"),
            ("page", "2"),
            ("limit", "5"),
            ("housing", "true"),
        ]);

        let filter = query.filter_spec();
        assert_eq!(filter.conditions.len(), 1);
        assert_eq!(filter.conditions[0].field, "housing");
        assert_eq!(filter.conditions[0].operator, FilterOperator::Eq);
        assert_eq!(filter.conditions[0].value, "true");
    }

    #[test]
    fn filter_parse_with_operator() {
        let query = request(&[("average_cost[lte]", "10000"), ("rating[gte]", "8")]);
        let filter = query.filter_spec();

        assert_eq!(
            filter.conditions,
            vec![
                FilterCondition::new("average_cost", FilterOperator::Lte, "10000"),
                FilterCondition::new("rating", FilterOperator::Gte, "8"),
            ]
        );
    }

    #[test]
    fn unknown_bracket_word_stays_literal() {
        let query = request(&[("price[ne]", "5"), ("title[gtx]", "a"), ("[gt]", "1")]);
        let fields: Vec<(String, FilterOperator)> = query
            .filter_spec()
            .conditions
            .into_iter()
            .map(|c| (c.field, c.operator))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("[gt]".to_string(), FilterOperator::Eq),
                ("price[ne]".to_string(), FilterOperator::Eq),
                ("title[gtx]".to_string(), FilterOperator::Eq),
            ]
        );
    }

    #[test]
    fn operator_words_inside_names_are_untouched() {
        let query = request(&[("interest", "gt"), ("length[in]", "1,2")]);
        let filter = query.filter_spec();

        assert_eq!(
            filter.conditions,
            vec![
                FilterCondition::new("interest", FilterOperator::Eq, "gt"),
                FilterCondition::new("length", FilterOperator::In, "1,2"),
            ]
        );
        assert_eq!(filter.conditions[1].list_values(), vec!["1", "2"]);
    }

    #[test]
    fn select_normalises_commas_and_spaces() {
        let query = request(&[("select", "name, email,,role")]);
        assert_eq!(
            query.select(),
            Some(vec!["name".to_string(), "email".to_string(), "role".to_string()])
        );
        assert_eq!(request(&[("select", " , ")]).select(), None);
        assert_eq!(request(&[]).select(), None);
    }

    #[test]
    fn sort_parse() {
        let query = request(&[("sort", "-average_cost,name")]);
        assert_eq!(
            query.sort(),
            vec![SortSpec::desc("average_cost"), SortSpec::asc("name")]
        );
    }

    #[test]
    fn sort_defaults_to_newest_first() {
        assert_eq!(request(&[]).sort(), vec![SortSpec::desc("created_at")]);
        assert_eq!(
            request(&[("sort", ", -")]).sort(),
            vec![SortSpec::desc("created_at")]
        );
    }

    #[test]
    fn pagination_parse_falls_back_to_defaults() {
        let query = request(&[("page", "3"), ("limit", "10")]);
        assert_eq!((query.page(), query.limit()), (3, 10));

        for bad in ["abc", "0", "-2", "", "1.5"] {
            let query = request(&[("page", bad), ("limit", bad)]);
            assert_eq!((query.page(), query.limit()), (1, 25), "input {bad:?}");
        }
    }

    #[test]
    fn oversized_pagination_falls_back_to_defaults() {
        let query = request(&[("limit", "18446744073709551615")]);
        assert_eq!(query.window(), (1, 25));

        let query = request(&[("page", "400000000000000000")]);
        assert_eq!(query.window(), (1, 25));

        let query = request(&[("page", "4"), ("limit", "9223372036854775807")]);
        assert_eq!(query.window(), (1, 25));

        let query = request(&[("page", "1"), ("limit", "9223372036854775807")]);
        assert_eq!(query.window(), (1, MAX_WINDOW));
    }

    #[test]
    fn pagination_boundaries() {
        let p = Pagination::compute(1, 25, 25);
        assert_eq!((p.next, p.prev), (None, None));

        let p = Pagination::compute(1, 10, 25);
        assert_eq!((p.next, p.prev), (Some(2), None));

        let p = Pagination::compute(3, 10, 25);
        assert_eq!((p.next, p.prev), (None, Some(2)));
        assert_eq!(p.start_index(), 20);

        let p = Pagination::compute(2, 10, 25);
        assert_eq!((p.next, p.prev), (Some(3), Some(1)));
    }

    #[test]
    fn envelope_serialises_under_resource_name() {
        let envelope = ResultEnvelope::new(
            "Bootcamp",
            vec![json!({"id": "a"})],
            Pagination::compute(1, 10, 25),
        );

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": true,
                "data": {
                    "count": 1,
                    "pagination": { "next": 2, "limit": 10 },
                    "bootcamp": [{ "id": "a" }]
                }
            })
        );
    }
}
