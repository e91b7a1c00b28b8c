use chrono::{DateTime, NaiveDate, NaiveDateTime};
use sea_orm::EntityTrait;
use thiserror::Error;
use uuid::Uuid;

/// Whitelisted field kind, used to coerce raw query values into `sea_orm::Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    I32,
    I64,
    F64,
    Bool,
    Uuid,
    DateTime,
    /// JSON array of strings; equality means "contains".
    StringList,
}

#[derive(Clone, Debug)]
pub struct Field<E: EntityTrait> {
    pub name: &'static str,
    pub col: E::Column,
    pub kind: FieldKind,
}

/// Ordered whitelist of the fields a collection exposes.
#[derive(Clone, Debug)]
pub struct FieldMap<E: EntityTrait> {
    fields: Vec<Field<E>>,
}

impl<E: EntityTrait> Default for FieldMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> FieldMap<E> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn insert(mut self, name: &'static str, col: E::Column, kind: FieldKind) -> Self {
        self.fields.push(Field { name, col, kind });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Field<E>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Columns to project. Unknown names are dropped and `id` is always kept.
    pub fn selection(&self, select: Option<&[String]>) -> Vec<&Field<E>> {
        match select {
            None => self.fields.iter().collect(),
            Some(names) => self
                .fields
                .iter()
                .filter(|f| f.name == "id" || names.iter().any(|n| n == f.name))
                .collect(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryBuildError {
    #[error("invalid value {value:?} for field {field}: expected {expected:?}")]
    InvalidValue {
        field: String,
        value: String,
        expected: FieldKind,
    },

    #[error("operator {operator} is not supported on field {field}")]
    UnsupportedOperator { field: String, operator: String },
}

pub type QueryBuildResult<T> = Result<T, QueryBuildError>;

/// Converts a raw query-string value to the column's type.
pub fn coerce(field: &str, kind: FieldKind, raw: &str) -> QueryBuildResult<sea_orm::Value> {
    let invalid = || QueryBuildError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
        expected: kind,
    };
    let trimmed = raw.trim();

    let value = match kind {
        FieldKind::String | FieldKind::StringList => raw.to_string().into(),
        FieldKind::I32 => trimmed.parse::<i32>().map_err(|_| invalid())?.into(),
        FieldKind::I64 => trimmed.parse::<i64>().map_err(|_| invalid())?.into(),
        FieldKind::F64 => trimmed.parse::<f64>().map_err(|_| invalid())?.into(),
        FieldKind::Bool => trimmed.parse::<bool>().map_err(|_| invalid())?.into(),
        FieldKind::Uuid => trimmed.parse::<Uuid>().map_err(|_| invalid())?.into(),
        FieldKind::DateTime => parse_datetime(trimmed).ok_or_else(invalid)?.into(),
    };

    Ok(value)
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` timestamp or a bare date.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    raw.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
