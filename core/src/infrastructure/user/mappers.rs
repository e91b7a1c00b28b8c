use chrono::{TimeZone, Utc};

use crate::domain::user::entities::User;
use crate::entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::infrastructure::query::field_map::{FieldKind, FieldMap};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role.parse().unwrap_or_default(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

/// Queryable user fields. The password column is absent so it
/// can be neither selected nor filtered on.
pub fn user_fields() -> FieldMap<UserEntity> {
    FieldMap::new()
        .insert("id", UserColumn::Id, FieldKind::Uuid)
        .insert("name", UserColumn::Name, FieldKind::String)
        .insert("email", UserColumn::Email, FieldKind::String)
        .insert("role", UserColumn::Role, FieldKind::String)
        .insert("created_at", UserColumn::CreatedAt, FieldKind::DateTime)
        .insert("updated_at", UserColumn::UpdatedAt, FieldKind::DateTime)
}
