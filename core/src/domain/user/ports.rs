use uuid::Uuid;

use crate::domain::{
    advanced_results::value_objects::{QueryRequest, ResultEnvelope},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user::{
        entities::User,
        value_objects::{CreateUserInput, UpdateUserInput},
    },
};

/// Account administration. Every operation is restricted to admins.
pub trait UserService: Send + Sync {
    fn get_users(
        &self,
        identity: Identity,
        query: QueryRequest,
    ) -> impl Future<Output = Result<ResultEnvelope, CoreError>> + Send;

    fn get_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn create_user(
        &self,
        identity: Identity,
        input: CreateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn update_user(
        &self,
        identity: Identity,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete_user(
        &self,
        identity: Identity,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create(
        &self,
        user: User,
        password_hash: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Returns the user together with the stored password hash.
    fn get_by_email_with_password(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<(User, String)>, CoreError>> + Send;

    fn update(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
