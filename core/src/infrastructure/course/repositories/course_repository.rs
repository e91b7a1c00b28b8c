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
    course::{entities::Course, ports::CourseRepository},
};
use crate::entity::courses::{
    ActiveModel as CourseActiveModel, Column as CourseColumn, Entity as CourseEntity,
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
pub struct PostgresCourseRepository {
    pub db: DatabaseConnection,
}

impl PostgresCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(course: Course) -> CourseActiveModel {
    CourseActiveModel {
        id: Set(course.id),
        bootcamp_id: Set(course.bootcamp_id),
        user_id: Set(course.user_id),
        title: Set(course.title),
        description: Set(course.description),
        weeks: Set(course.weeks),
        tuition: Set(course.tuition),
        minimum_skill: Set(course.minimum_skill.to_string()),
        scholarship_available: Set(course.scholarship_available),
        created_at: Set(course.created_at.naive_utc()),
        updated_at: Set(course.updated_at.naive_utc()),
    }
}

impl CourseRepository for PostgresCourseRepository {
    async fn create(&self, course: Course) -> Result<Course, CoreError> {
        CourseEntity::insert(to_active_model(course))
            .exec_with_returning(&self.db)
            .await
            .map(Course::from)
            .map_err(|e| map_write_error("Failed to create course", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Course>, CoreError> {
        let course = CourseEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get course by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Course::from);

        Ok(course)
    }

    async fn update(&self, course: Course) -> Result<Course, CoreError> {
        let mut model = to_active_model(course);
        model.created_at = NotSet;

        CourseEntity::update(model)
            .exec(&self.db)
            .await
            .map(Course::from)
            .map_err(|e| map_write_error("Failed to update course", e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        CourseEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete course: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn tuitions_by_bootcamp(&self, bootcamp_id: Uuid) -> Result<Vec<i64>, CoreError> {
        CourseEntity::find()
            .select_only()
            .column(CourseColumn::Tuition)
            .filter(CourseColumn::BootcampId.eq(bootcamp_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch tuitions: {}", e);
                CoreError::InternalServerError
            })
    }
}

impl Collection for PostgresCourseRepository {
    fn model_name(&self) -> &'static str {
        "Course"
    }

    async fn count(&self, filter: FilterSpec) -> Result<u64, CoreError> {
        count_matching(&self.db, &course_fields(), &filter).await
    }

    async fn find(&self, query: ListQuery) -> Result<Vec<Value>, CoreError> {
        let Some(populate) = query.populate.clone() else {
            return find_documents(&self.db, &course_fields(), &query).await;
        };

        match populate.path.as_str() {
            "bootcamp" => {
                Relation::one("bootcamp_id", "id", bootcamp_fields())
                    .find_populated(&self.db, &course_fields(), query, &populate)
                    .await
            }
            other => {
                warn!("Unknown course relation {}", other);
                find_documents(&self.db, &course_fields(), &query).await
            }
        }
    }
}
