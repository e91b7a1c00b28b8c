use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{Value, json};
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::{
    advanced_results::{
        ports::Collection,
        value_objects::{FilterSpec, ListQuery},
    },
    bootcamp::{entities::Bootcamp, ports::BootcampRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::bootcamps::{
    ActiveModel as BootcampActiveModel, Column as BootcampColumn, Entity as BootcampEntity,
};
use crate::infrastructure::{
    bootcamp::mappers::bootcamp_fields,
    course::mappers::course_fields,
    db::map_write_error,
    query::{
        collection::{count_matching, find_documents},
        populate::Relation,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresBootcampRepository {
    pub db: DatabaseConnection,
}

impl PostgresBootcampRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(bootcamp: Bootcamp) -> BootcampActiveModel {
    BootcampActiveModel {
        id: Set(bootcamp.id),
        user_id: Set(bootcamp.user_id),
        name: Set(bootcamp.name),
        slug: Set(bootcamp.slug),
        description: Set(bootcamp.description),
        website: Set(bootcamp.website),
        phone: Set(bootcamp.phone),
        email: Set(bootcamp.email),
        address: Set(bootcamp.address),
        careers: Set(json!(bootcamp.careers)),
        average_rating: Set(bootcamp.average_rating),
        average_cost: Set(bootcamp.average_cost),
        photo: Set(bootcamp.photo),
        housing: Set(bootcamp.housing),
        job_assistance: Set(bootcamp.job_assistance),
        job_guarantee: Set(bootcamp.job_guarantee),
        accept_gi: Set(bootcamp.accept_gi),
        created_at: Set(bootcamp.created_at.naive_utc()),
        updated_at: Set(bootcamp.updated_at.naive_utc()),
    }
}

impl BootcampRepository for PostgresBootcampRepository {
    async fn create(&self, bootcamp: Bootcamp) -> Result<Bootcamp, CoreError> {
        BootcampEntity::insert(to_active_model(bootcamp))
            .exec_with_returning(&self.db)
            .await
            .map(Bootcamp::from)
            .map_err(|e| map_write_error("Failed to create bootcamp", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Bootcamp>, CoreError> {
        let bootcamp = BootcampEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get bootcamp by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Bootcamp::from);

        Ok(bootcamp)
    }

    async fn update(&self, bootcamp: Bootcamp) -> Result<Bootcamp, CoreError> {
        let mut model = to_active_model(bootcamp);
        // Ratings and costs are owned by the review and course writes.
        model.average_rating = NotSet;
        model.average_cost = NotSet;
        model.created_at = NotSet;

        BootcampEntity::update(model)
            .exec(&self.db)
            .await
            .map(Bootcamp::from)
            .map_err(|e| map_write_error("Failed to update bootcamp", e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        BootcampEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete bootcamp: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn count_by_owner(&self, user_id: Uuid) -> Result<u64, CoreError> {
        BootcampEntity::find()
            .filter(BootcampColumn::UserId.eq(user_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count bootcamps by owner: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn set_average_rating(
        &self,
        id: Uuid,
        average_rating: Option<f64>,
    ) -> Result<(), CoreError> {
        BootcampEntity::update_many()
            .col_expr(BootcampColumn::AverageRating, Expr::value(average_rating))
            .filter(BootcampColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to set average rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn set_average_cost(&self, id: Uuid, average_cost: Option<f64>) -> Result<(), CoreError> {
        BootcampEntity::update_many()
            .col_expr(BootcampColumn::AverageCost, Expr::value(average_cost))
            .filter(BootcampColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to set average cost: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

impl Collection for PostgresBootcampRepository {
    fn model_name(&self) -> &'static str {
        "Bootcamp"
    }

    async fn count(&self, filter: FilterSpec) -> Result<u64, CoreError> {
        count_matching(&self.db, &bootcamp_fields(), &filter).await
    }

    async fn find(&self, query: ListQuery) -> Result<Vec<Value>, CoreError> {
        let Some(populate) = query.populate.clone() else {
            return find_documents(&self.db, &bootcamp_fields(), &query).await;
        };

        match populate.path.as_str() {
            "courses" => {
                Relation::many("id", "bootcamp_id", course_fields())
                    .find_populated(&self.db, &bootcamp_fields(), query, &populate)
                    .await
            }
            other => {
                warn!("Unknown bootcamp relation {}", other);
                find_documents(&self.db, &bootcamp_fields(), &query).await
            }
        }
    }
}
