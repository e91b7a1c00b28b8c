use chrono::{TimeZone, Utc};

use crate::domain::review::entities::Review;
use crate::entity::reviews::{Column as ReviewColumn, Entity as ReviewEntity, Model as ReviewModel};
use crate::infrastructure::query::field_map::{FieldKind, FieldMap};

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            bootcamp_id: model.bootcamp_id,
            user_id: model.user_id,
            title: model.title,
            text: model.text,
            rating: model.rating,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

pub fn review_fields() -> FieldMap<ReviewEntity> {
    FieldMap::new()
        .insert("id", ReviewColumn::Id, FieldKind::Uuid)
        .insert("bootcamp_id", ReviewColumn::BootcampId, FieldKind::Uuid)
        .insert("user_id", ReviewColumn::UserId, FieldKind::Uuid)
        .insert("title", ReviewColumn::Title, FieldKind::String)
        .insert("text", ReviewColumn::Text, FieldKind::String)
        .insert("rating", ReviewColumn::Rating, FieldKind::I32)
        .insert("created_at", ReviewColumn::CreatedAt, FieldKind::DateTime)
        .insert("updated_at", ReviewColumn::UpdatedAt, FieldKind::DateTime)
}
