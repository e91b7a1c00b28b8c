use chrono::{TimeZone, Utc};

use crate::domain::course::entities::{Course, MinimumSkill};
use crate::entity::courses::{Column as CourseColumn, Entity as CourseEntity, Model as CourseModel};
use crate::infrastructure::query::field_map::{FieldKind, FieldMap};

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            bootcamp_id: model.bootcamp_id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            weeks: model.weeks,
            tuition: model.tuition,
            minimum_skill: model
                .minimum_skill
                .parse()
                .unwrap_or(MinimumSkill::Beginner),
            scholarship_available: model.scholarship_available,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

pub fn course_fields() -> FieldMap<CourseEntity> {
    FieldMap::new()
        .insert("id", CourseColumn::Id, FieldKind::Uuid)
        .insert("bootcamp_id", CourseColumn::BootcampId, FieldKind::Uuid)
        .insert("user_id", CourseColumn::UserId, FieldKind::Uuid)
        .insert("title", CourseColumn::Title, FieldKind::String)
        .insert("description", CourseColumn::Description, FieldKind::String)
        .insert("weeks", CourseColumn::Weeks, FieldKind::I32)
        .insert("tuition", CourseColumn::Tuition, FieldKind::I64)
        .insert("minimum_skill", CourseColumn::MinimumSkill, FieldKind::String)
        .insert(
            "scholarship_available",
            CourseColumn::ScholarshipAvailable,
            FieldKind::Bool,
        )
        .insert("created_at", CourseColumn::CreatedAt, FieldKind::DateTime)
        .insert("updated_at", CourseColumn::UpdatedAt, FieldKind::DateTime)
}
