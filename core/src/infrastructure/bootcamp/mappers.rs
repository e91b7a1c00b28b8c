use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::domain::bootcamp::entities::Bootcamp;
use crate::entity::bootcamps::{
    Column as BootcampColumn, Entity as BootcampEntity, Model as BootcampModel,
};
use crate::infrastructure::query::field_map::{FieldKind, FieldMap};

impl From<BootcampModel> for Bootcamp {
    fn from(model: BootcampModel) -> Self {
        let careers = match model.careers {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        Bootcamp {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            website: model.website,
            phone: model.phone,
            email: model.email,
            address: model.address,
            careers,
            average_rating: model.average_rating,
            average_cost: model.average_cost,
            photo: model.photo,
            housing: model.housing,
            job_assistance: model.job_assistance,
            job_guarantee: model.job_guarantee,
            accept_gi: model.accept_gi,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

pub fn bootcamp_fields() -> FieldMap<BootcampEntity> {
    FieldMap::new()
        .insert("id", BootcampColumn::Id, FieldKind::Uuid)
        .insert("user_id", BootcampColumn::UserId, FieldKind::Uuid)
        .insert("name", BootcampColumn::Name, FieldKind::String)
        .insert("slug", BootcampColumn::Slug, FieldKind::String)
        .insert("description", BootcampColumn::Description, FieldKind::String)
        .insert("website", BootcampColumn::Website, FieldKind::String)
        .insert("phone", BootcampColumn::Phone, FieldKind::String)
        .insert("email", BootcampColumn::Email, FieldKind::String)
        .insert("address", BootcampColumn::Address, FieldKind::String)
        .insert("careers", BootcampColumn::Careers, FieldKind::StringList)
        .insert("average_rating", BootcampColumn::AverageRating, FieldKind::F64)
        .insert("average_cost", BootcampColumn::AverageCost, FieldKind::F64)
        .insert("photo", BootcampColumn::Photo, FieldKind::String)
        .insert("housing", BootcampColumn::Housing, FieldKind::Bool)
        .insert("job_assistance", BootcampColumn::JobAssistance, FieldKind::Bool)
        .insert("job_guarantee", BootcampColumn::JobGuarantee, FieldKind::Bool)
        .insert("accept_gi", BootcampColumn::AcceptGi, FieldKind::Bool)
        .insert("created_at", BootcampColumn::CreatedAt, FieldKind::DateTime)
        .insert("updated_at", BootcampColumn::UpdatedAt, FieldKind::DateTime)
}
