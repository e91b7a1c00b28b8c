use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    advanced_results::{
        ports::Collection,
        services::advanced_results,
        value_objects::{QueryRequest, ResultEnvelope},
    },
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    user::{
        entities::{Role, User},
        ports::{UserRepository, UserService},
        value_objects::{CreateUserInput, UpdateUserInput},
    },
};

impl<B, C, R, U, H, T, HC> UserService for Service<B, C, R, U, H, T, HC>
where
    B: Send + Sync,
    C: Send + Sync,
    R: Send + Sync,
    U: UserRepository + Collection,
    H: HasherRepository,
    T: Send + Sync,
    HC: Send + Sync,
{
    async fn get_users(
        &self,
        identity: Identity,
        query: QueryRequest,
    ) -> Result<ResultEnvelope, CoreError> {
        self.policy.ensure_roles(&identity, &[Role::Admin])?;

        advanced_results(&self.user_repository, query, None).await
    }

    async fn get_user(&self, identity: Identity, user_id: Uuid) -> Result<User, CoreError> {
        self.policy.ensure_roles(&identity, &[Role::Admin])?;

        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input), fields(email = %input.email))]
    async fn create_user(
        &self,
        identity: Identity,
        input: CreateUserInput,
    ) -> Result<User, CoreError> {
        self.policy.ensure_roles(&identity, &[Role::Admin])?;

        let password_hash = self
            .hasher_repository
            .hash_password(input.password)
            .await?;
        let user = User::new(input.name, input.email, input.role.unwrap_or_default());

        self.user_repository.create(user, password_hash).await
    }

    #[instrument(skip(self, identity, input))]
    async fn update_user(
        &self,
        identity: Identity,
        user_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<User, CoreError> {
        self.policy.ensure_roles(&identity, &[Role::Admin])?;

        let mut user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(email) = input.email {
            user.email = email.to_lowercase();
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        self.user_repository.update(user).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_user(&self, identity: Identity, user_id: Uuid) -> Result<(), CoreError> {
        self.policy.ensure_roles(&identity, &[Role::Admin])?;

        if self.user_repository.get_by_id(user_id).await?.is_none() {
            return Err(CoreError::NotFound);
        }

        self.user_repository.delete(user_id).await
    }
}
