use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use serde_json::Value;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    advanced_results::{
        ports::Collection,
        value_objects::{FilterSpec, ListQuery},
    },
    common::entities::app_errors::CoreError,
    review::{entities::Review, ports::ReviewRepository},
};
use crate::entity::reviews::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
};
use crate::infrastructure::{
    bootcamp::mappers::bootcamp_fields,
    db::map_write_error,
    query::{
        collection::{count_matching, find_documents},
        populate::Relation,
    },
    review::mappers::review_fields,
};

#[derive(Debug, Clone)]
pub struct PostgresReviewRepository {
    pub db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(review: Review) -> ReviewActiveModel {
    ReviewActiveModel {
        id: Set(review.id),
        bootcamp_id: Set(review.bootcamp_id),
        user_id: Set(review.user_id),
        title: Set(review.title),
        text: Set(review.text),
        rating: Set(review.rating),
        created_at: Set(review.created_at.naive_utc()),
        updated_at: Set(review.updated_at.naive_utc()),
    }
}

impl ReviewRepository for PostgresReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, CoreError> {
        ReviewEntity::insert(to_active_model(review))
            .exec_with_returning(&self.db)
            .await
            .map(Review::from)
            .map_err(|e| map_write_error("Failed to create review", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Review>, CoreError> {
        let review = ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get review by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Review::from);

        Ok(review)
    }

    async fn update(&self, review: Review) -> Result<Review, CoreError> {
        let mut model = to_active_model(review);
        model.created_at = NotSet;

        ReviewEntity::update(model)
            .exec(&self.db)
            .await
            .map(Review::from)
            .map_err(|e| map_write_error("Failed to update review", e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        ReviewEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete review: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn ratings_by_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<i32>, CoreError> {
        ReviewEntity::find()
            .select_only()
            .column(ReviewColumn::Rating)
            .filter(ReviewColumn::BootcampId.eq(bootcamp_id))
            .into_tuple::<i32>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ratings: {}", e);
                CoreError::InternalServerError
            })
    }
}

impl Collection for PostgresReviewRepository {
    fn model_name(&self) -> &'static str {
        "Review"
    }

    async fn count(&self, filter: FilterSpec) -> Result<u64, CoreError> {
        count_matching(&self.db, &review_fields(), &filter).await
    }

    async fn find(&self, query: ListQuery) -> Result<Vec<Value>, CoreError> {
        let Some(populate) = query.populate.clone() else {
            return find_documents(&self.db, &review_fields(), &query).await;
        };

        match populate.path.as_str() {
            "bootcamp" => {
                Relation::one("bootcamp_id", "id", bootcamp_fields())
                    .find_populated(&self.db, &review_fields(), query, &populate)
                    .await
            }
            other => {
                warn!("Unknown review relation {}", other);
                find_documents(&self.db, &review_fields(), &query).await
            }
        }
    }
}
