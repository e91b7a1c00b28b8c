use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    advanced_results::{
        ports::Collection,
        services::advanced_results,
        value_objects::{Populate, QueryRequest, ResultEnvelope},
    },
    authentication::value_objects::Identity,
    bootcamp::{
        entities::Bootcamp,
        ports::{BootcampRepository, BootcampService},
        value_objects::{CreateBootcampInput, UpdateBootcampInput},
    },
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    user::entities::Role,
};

impl<B, C, R, U, H, T, HC> Service<B, C, R, U, H, T, HC>
where
    B: BootcampRepository,
{
    pub(crate) async fn find_bootcamp(&self, bootcamp_id: Uuid) -> Result<Bootcamp, CoreError> {
        self.bootcamp_repository
            .get_by_id(bootcamp_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<B, C, R, U, H, T, HC> BootcampService for Service<B, C, R, U, H, T, HC>
where
    B: BootcampRepository + Collection,
    C: Send + Sync,
    R: Send + Sync,
    U: Send + Sync,
    H: Send + Sync,
    T: Send + Sync,
    HC: Send + Sync,
{
    async fn get_bootcamps(&self, query: QueryRequest) -> Result<ResultEnvelope, CoreError> {
        advanced_results(
            &self.bootcamp_repository,
            query,
            Some(Populate::path("courses")),
        )
        .await
    }

    async fn get_bootcamp(&self, bootcamp_id: Uuid) -> Result<Bootcamp, CoreError> {
        self.find_bootcamp(bootcamp_id).await
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn create_bootcamp(
        &self,
        identity: Identity,
        input: CreateBootcampInput,
    ) -> Result<Bootcamp, CoreError> {
        self.policy
            .ensure_roles(&identity, &[Role::Publisher, Role::Admin])?;

        if !identity.is_admin() && self.bootcamp_repository.count_by_owner(identity.id()).await? > 0 {
            return Err(CoreError::Invalid(format!(
                "The user with ID {} has already published a bootcamp",
                identity.id()
            )));
        }

        let bootcamp = self
            .bootcamp_repository
            .create(Bootcamp::new(identity.id(), input))
            .await?;

        info!(bootcamp_id = %bootcamp.id, "bootcamp created");
        Ok(bootcamp)
    }

    #[instrument(skip(self, identity, input))]
    async fn update_bootcamp(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: UpdateBootcampInput,
    ) -> Result<Bootcamp, CoreError> {
        let mut bootcamp = self.find_bootcamp(bootcamp_id).await?;

        ensure_policy(
            Ok(self.policy.is_owner_or_admin(&identity, bootcamp.user_id)),
            &format!(
                "User {} is not authorized to update this bootcamp",
                identity.id()
            ),
        )?;

        bootcamp.apply(input);
        self.bootcamp_repository.update(bootcamp).await
    }

    #[instrument(skip(self, identity))]
    async fn delete_bootcamp(&self, identity: Identity, bootcamp_id: Uuid) -> Result<(), CoreError> {
        let bootcamp = self.find_bootcamp(bootcamp_id).await?;

        ensure_policy(
            Ok(self.policy.is_owner_or_admin(&identity, bootcamp.user_id)),
            &format!(
                "User {} is not authorized to delete this bootcamp",
                identity.id()
            ),
        )?;

        self.bootcamp_repository.delete(bootcamp_id).await?;
        info!(bootcamp_id = %bootcamp_id, "bootcamp deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use serde_json::Value;

    use super::*;
    use crate::domain::{
        advanced_results::value_objects::{FilterSpec, ListQuery},
        user::entities::User,
    };

    mock! {
        pub Bootcamps {}

        impl BootcampRepository for Bootcamps {
            fn create(&self, bootcamp: Bootcamp) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;
            fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<Bootcamp>, CoreError>> + Send;
            fn update(&self, bootcamp: Bootcamp) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;
            fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
            fn count_by_owner(&self, user_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
            fn set_average_rating(&self, id: Uuid, average_rating: Option<f64>) -> impl Future<Output = Result<(), CoreError>> + Send;
            fn set_average_cost(&self, id: Uuid, average_cost: Option<f64>) -> impl Future<Output = Result<(), CoreError>> + Send;
        }

        impl Collection for Bootcamps {
            fn model_name(&self) -> &'static str;
            fn count(&self, filter: FilterSpec) -> impl Future<Output = Result<u64, CoreError>> + Send;
            fn find(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;
        }
    }

    type BootcampsOnly = Service<MockBootcamps, (), (), (), (), (), ()>;

    fn service(bootcamps: MockBootcamps) -> BootcampsOnly {
        Service::new(bootcamps, (), (), (), (), (), ())
    }

    fn identity(role: Role) -> Identity {
        Identity::new(User::new("Owner".into(), "owner@example.com".into(), role))
    }

    fn input() -> CreateBootcampInput {
        CreateBootcampInput {
            name: "Devworks Bootcamp".into(),
            description: "Full stack".into(),
            website: None,
            phone: None,
            email: None,
            address: "Boston MA".into(),
            careers: vec!["Web Development".into()],
            housing: false,
            job_assistance: false,
            job_guarantee: false,
            accept_gi: false,
        }
    }

    #[tokio::test]
    async fn publisher_cannot_publish_twice() {
        let mut bootcamps = MockBootcamps::new();
        bootcamps
            .expect_count_by_owner()
            .returning(|_| Box::pin(async { Ok(1) }));
        bootcamps.expect_create().never();

        let result = service(bootcamps)
            .create_bootcamp(identity(Role::Publisher), input())
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn plain_user_cannot_create() {
        let mut bootcamps = MockBootcamps::new();
        bootcamps.expect_create().never();

        let result = service(bootcamps)
            .create_bootcamp(identity(Role::User), input())
            .await;

        assert_eq!(
            result,
            Err(CoreError::Forbidden(
                "User role user is not authorized to access this route".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn admin_skips_the_single_bootcamp_rule() {
        let mut bootcamps = MockBootcamps::new();
        bootcamps.expect_count_by_owner().never();
        bootcamps
            .expect_create()
            .returning(|bootcamp| Box::pin(async move { Ok(bootcamp) }));

        let admin = identity(Role::Admin);
        let created = service(bootcamps)
            .create_bootcamp(admin.clone(), input())
            .await
            .unwrap();

        assert_eq!(created.user_id, admin.id());
        assert_eq!(created.slug, "devworks-bootcamp");
    }

    #[tokio::test]
    async fn only_owner_or_admin_updates() {
        let owner = identity(Role::Publisher);
        let existing = Bootcamp::new(owner.id(), input());
        let id = existing.id;

        let mut bootcamps = MockBootcamps::new();
        bootcamps
            .expect_get_by_id()
            .returning(move |_| {
                let existing = existing.clone();
                Box::pin(async move { Ok(Some(existing)) })
            });
        bootcamps.expect_update().never();

        let stranger = identity(Role::Publisher);
        let result = service(bootcamps)
            .update_bootcamp(stranger, id, UpdateBootcampInput::default())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn missing_bootcamp_is_not_found() {
        let mut bootcamps = MockBootcamps::new();
        bootcamps
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(bootcamps).get_bootcamp(Uuid::new_v4()).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn listing_populates_courses() {
        let mut bootcamps = MockBootcamps::new();
        bootcamps.expect_model_name().return_const("Bootcamp");
        bootcamps
            .expect_count()
            .returning(|_| Box::pin(async { Ok(0) }));
        bootcamps
            .expect_find()
            .withf(|query| query.populate == Some(Populate::path("courses")))
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let envelope = service(bootcamps)
            .get_bootcamps(QueryRequest::new())
            .await
            .unwrap();

        assert_eq!(envelope.resource, "bootcamp");
        assert_eq!(envelope.count, 0);
    }
}
