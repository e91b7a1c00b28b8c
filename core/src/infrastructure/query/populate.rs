use std::collections::{BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::Value;
use tracing::error;

use crate::domain::{
    advanced_results::value_objects::{FilterOperator, FilterSpec, ListQuery, Populate},
    common::entities::app_errors::CoreError,
};
use crate::infrastructure::query::{collection::find_documents, field_map::FieldMap};

const ID_FIELD: &str = "id";

/// Link from documents of one collection to rows of `E`:
/// `document[local_key] == row[foreign_key]`.
pub struct Relation<E: EntityTrait> {
    local_key: &'static str,
    foreign_key: &'static str,
    fields: FieldMap<E>,
    many: bool,
}

impl<E: EntityTrait> Relation<E> {
    /// Inlines a single row (or `null`).
    pub fn one(local_key: &'static str, foreign_key: &'static str, fields: FieldMap<E>) -> Self {
        Self {
            local_key,
            foreign_key,
            fields,
            many: false,
        }
    }

    /// Inlines every matching row as an array.
    pub fn many(local_key: &'static str, foreign_key: &'static str, fields: FieldMap<E>) -> Self {
        Self {
            local_key,
            foreign_key,
            fields,
            many: true,
        }
    }

    /// One page of `P` documents with `populate` applied.
    ///
    /// The local key is projected for the join even when `select` leaves it
    /// out, and is removed from the documents again afterwards.
    pub async fn find_populated<P: EntityTrait>(
        &self,
        db: &DatabaseConnection,
        fields: &FieldMap<P>,
        mut query: ListQuery,
        populate: &Populate,
    ) -> Result<Vec<Value>, CoreError> {
        let borrowed_key = self.project_local_key(&mut query);

        let mut documents = find_documents(db, fields, &query).await?;
        self.inline(db, &mut documents, populate).await?;

        if borrowed_key {
            for document in documents.iter_mut() {
                if let Some(object) = document.as_object_mut() {
                    object.remove(self.local_key);
                }
            }
        }

        Ok(documents)
    }

    /// Adds the local key to an explicit projection. `true` when it was missing.
    fn project_local_key(&self, query: &mut ListQuery) -> bool {
        match query.select.as_mut() {
            Some(select)
                if self.local_key != ID_FIELD && !select.iter().any(|f| f == self.local_key) =>
            {
                select.push(self.local_key.to_string());
                true
            }
            _ => false,
        }
    }

    /// Fetches the related rows of every document in one query and writes
    /// them under `populate.path`.
    pub async fn inline(
        &self,
        db: &DatabaseConnection,
        documents: &mut [Value],
        populate: &Populate,
    ) -> Result<(), CoreError> {
        let keys: BTreeSet<String> = documents
            .iter()
            .filter_map(|doc| doc.get(self.local_key)?.as_str().map(str::to_string))
            .collect();

        let related = if keys.is_empty() {
            Vec::new()
        } else {
            let filter = FilterSpec::new().and(
                self.foreign_key,
                FilterOperator::In,
                keys.into_iter().collect::<Vec<_>>().join(","),
            );
            let mut query = ListQuery::matching(filter);
            query.select = populate.select.clone().map(|mut select| {
                select.push(self.foreign_key.to_string());
                select
            });

            find_documents(db, &self.fields, &query).await.map_err(|e| {
                error!("Failed to populate {}: {}", populate.path, e);
                e
            })?
        };

        let mut groups: HashMap<String, Vec<Value>> = HashMap::new();
        for row in related {
            if let Some(key) = row.get(self.foreign_key).and_then(Value::as_str) {
                groups.entry(key.to_string()).or_default().push(row);
            }
        }

        for document in documents.iter_mut() {
            let linked = document
                .get(self.local_key)
                .and_then(Value::as_str)
                .and_then(|key| groups.get(key))
                .cloned()
                .unwrap_or_default();

            let value = if self.many {
                Value::Array(linked)
            } else {
                linked.into_iter().next().unwrap_or(Value::Null)
            };

            if let Some(object) = document.as_object_mut() {
                object.insert(populate.path.clone(), value);
            }
        }

        Ok(())
    }
}
