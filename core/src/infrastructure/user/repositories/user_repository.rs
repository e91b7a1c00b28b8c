use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    advanced_results::{
        ports::Collection,
        value_objects::{FilterSpec, ListQuery},
    },
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::{
    db::map_write_error,
    query::collection::{count_matching, find_documents},
    user::mappers::user_fields,
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User, password_hash: String) -> Result<User, CoreError> {
        UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            role: Set(user.role.to_string()),
            password: Set(password_hash),
            created_at: Set(user.created_at.naive_utc()),
            updated_at: Set(user.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(User::from)
        .map_err(|e| map_write_error("Failed to create user", e))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_email_with_password(
        &self,
        email: String,
    ) -> Result<Option<(User, String)>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by email: {}", e);
                CoreError::InternalServerError
            })?
            .map(|model| {
                let password = model.password.clone();
                (User::from(model), password)
            });

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, CoreError> {
        UserEntity::update(UserActiveModel {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            role: Set(user.role.to_string()),
            updated_at: Set(user.updated_at.naive_utc()),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .map(User::from)
        .map_err(|e| map_write_error("Failed to update user", e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}

impl Collection for PostgresUserRepository {
    fn model_name(&self) -> &'static str {
        "User"
    }

    async fn count(&self, filter: FilterSpec) -> Result<u64, CoreError> {
        count_matching(&self.db, &user_fields(), &filter).await
    }

    async fn find(&self, query: ListQuery) -> Result<Vec<Value>, CoreError> {
        find_documents(&self.db, &user_fields(), &query).await
    }
}
