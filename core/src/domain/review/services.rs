use serde_json::Value;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    advanced_results::{
        ports::Collection,
        services::advanced_results,
        value_objects::{FilterSpec, ListQuery, QueryRequest, ResultEnvelope},
    },
    authentication::value_objects::Identity,
    bootcamp::{ports::BootcampRepository, value_objects::bootcamp_summary},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    review::{
        entities::{Review, average_rating},
        ports::{ReviewRepository, ReviewService},
        value_objects::{CreateReviewInput, UpdateReviewInput},
    },
    user::entities::Role,
};

impl<B, C, R, U, H, T, HC> Service<B, C, R, U, H, T, HC>
where
    B: BootcampRepository,
    R: ReviewRepository,
{
    async fn refresh_average_rating(&self, bootcamp_id: Uuid) {
        let result = async {
            let ratings = self.review_repository.ratings_by_bootcamp(bootcamp_id).await?;
            self.bootcamp_repository
                .set_average_rating(bootcamp_id, average_rating(&ratings))
                .await
        }
        .await;

        if let Err(e) = result {
            error!("Failed to refresh average rating of bootcamp {}: {}", bootcamp_id, e);
        }
    }

    /// Loads a review the caller owns, or any review for an admin.
    async fn find_owned_review(
        &self,
        identity: &Identity,
        review_id: Uuid,
        action: &str,
    ) -> Result<Review, CoreError> {
        let review = self
            .review_repository
            .get_by_id(review_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(self.policy.is_owner_or_admin(identity, review.user_id)),
            &format!("Not authorized to {action} review"),
        )?;

        Ok(review)
    }
}

impl<B, C, R, U, H, T, HC> ReviewService for Service<B, C, R, U, H, T, HC>
where
    B: BootcampRepository,
    C: Send + Sync,
    R: ReviewRepository + Collection,
    U: Send + Sync,
    H: Send + Sync,
    T: Send + Sync,
    HC: Send + Sync,
{
    async fn get_reviews(&self, query: QueryRequest) -> Result<ResultEnvelope, CoreError> {
        advanced_results(&self.review_repository, query, Some(bootcamp_summary())).await
    }

    async fn get_bootcamp_reviews(&self, bootcamp_id: Uuid) -> Result<Vec<Value>, CoreError> {
        let filter = FilterSpec::new().with_eq("bootcamp_id", bootcamp_id.to_string());

        self.review_repository
            .find(ListQuery::matching(filter).with_populate(Some(bootcamp_summary())))
            .await
    }

    async fn get_review(&self, review_id: Uuid) -> Result<Value, CoreError> {
        let filter = FilterSpec::new().with_eq("id", review_id.to_string());
        let query = ListQuery::matching(filter)
            .with_populate(Some(bootcamp_summary()))
            .with_limit(1);

        self.review_repository
            .find(query)
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn add_review(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateReviewInput,
    ) -> Result<Review, CoreError> {
        self.policy.ensure_roles(&identity, &[Role::User, Role::Admin])?;

        let bootcamp = self.find_bootcamp(bootcamp_id).await?;
        let review = self
            .review_repository
            .create(Review::new(bootcamp.id, identity.id(), input))
            .await?;

        info!(review_id = %review.id, "review added");
        self.refresh_average_rating(bootcamp.id).await;

        Ok(review)
    }

    #[instrument(skip(self, identity, input))]
    async fn update_review(
        &self,
        identity: Identity,
        review_id: Uuid,
        input: UpdateReviewInput,
    ) -> Result<Review, CoreError> {
        let mut review = self.find_owned_review(&identity, review_id, "update").await?;

        review.apply(input);
        let review = self.review_repository.update(review).await?;
        self.refresh_average_rating(review.bootcamp_id).await;

        Ok(review)
    }

    #[instrument(skip(self, identity))]
    async fn delete_review(&self, identity: Identity, review_id: Uuid) -> Result<(), CoreError> {
        let review = self.find_owned_review(&identity, review_id, "delete").await?;

        self.review_repository.delete(review.id).await?;
        self.refresh_average_rating(review.bootcamp_id).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::{mock, predicate::eq};

    use super::*;
    use crate::domain::{
        bootcamp::{
            entities::Bootcamp, ports::MockBootcampRepository,
            value_objects::CreateBootcampInput,
        },
        user::entities::User,
    };

    mock! {
        pub Reviews {}

        impl ReviewRepository for Reviews {
            fn create(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;
            fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;
            fn update(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;
            fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
            fn ratings_by_bootcamp(&self, bootcamp_id: Uuid) -> impl Future<Output = Result<Vec<i32>, CoreError>> + Send;
        }

        impl Collection for Reviews {
            fn model_name(&self) -> &'static str;
            fn count(&self, filter: FilterSpec) -> impl Future<Output = Result<u64, CoreError>> + Send;
            fn find(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;
        }
    }

    type ReviewsOnly = Service<MockBootcampRepository, (), MockReviews, (), (), (), ()>;

    fn service(bootcamps: MockBootcampRepository, reviews: MockReviews) -> ReviewsOnly {
        Service::new(bootcamps, (), reviews, (), (), (), ())
    }

    fn identity(role: Role) -> Identity {
        Identity::new(User::new("Reviewer".into(), "reviewer@example.com".into(), role))
    }

    fn bootcamp() -> Bootcamp {
        Bootcamp::new(
            Uuid::new_v4(),
            CreateBootcampInput {
                name: "Codemasters".into(),
                description: "Data science".into(),
                website: None,
                phone: None,
                email: None,
                address: "Boston MA".into(),
                careers: vec!["Data Science".into()],
                housing: false,
                job_assistance: false,
                job_guarantee: false,
                accept_gi: false,
            },
        )
    }

    fn review_input(rating: i32) -> CreateReviewInput {
        CreateReviewInput {
            title: "Learned a lot".into(),
            text: "Great instructors".into(),
            rating,
        }
    }

    fn bootcamps_returning(bootcamp: Bootcamp) -> MockBootcampRepository {
        let mut bootcamps = MockBootcampRepository::new();
        bootcamps.expect_get_by_id().returning(move |_| {
            let bootcamp = bootcamp.clone();
            Box::pin(async move { Ok(Some(bootcamp)) })
        });
        bootcamps
    }

    #[tokio::test]
    async fn adding_a_review_refreshes_average_rating() {
        let bootcamp = bootcamp();
        let bootcamp_id = bootcamp.id;
        let mut bootcamps = bootcamps_returning(bootcamp);
        bootcamps
            .expect_set_average_rating()
            .with(eq(bootcamp_id), eq(Some(22.0 / 3.0)))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut reviews = MockReviews::new();
        reviews
            .expect_create()
            .returning(|review| Box::pin(async move { Ok(review) }));
        reviews
            .expect_ratings_by_bootcamp()
            .returning(|_| Box::pin(async { Ok(vec![5, 8, 9]) }));

        let review = service(bootcamps, reviews)
            .add_review(identity(Role::User), bootcamp_id, review_input(9))
            .await
            .unwrap();

        assert_eq!(review.rating, 9);
        assert_eq!(review.bootcamp_id, bootcamp_id);
    }

    #[tokio::test]
    async fn publishers_cannot_review() {
        let mut reviews = MockReviews::new();
        reviews.expect_create().never();

        let result = service(MockBootcampRepository::new(), reviews)
            .add_review(identity(Role::Publisher), Uuid::new_v4(), review_input(7))
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn second_review_by_same_user_is_a_duplicate() {
        let bootcamp = bootcamp();
        let bootcamp_id = bootcamp.id;
        let mut bootcamps = bootcamps_returning(bootcamp);
        bootcamps.expect_set_average_rating().never();

        let mut reviews = MockReviews::new();
        reviews
            .expect_create()
            .returning(|_| Box::pin(async { Err(CoreError::DuplicateField) }));

        let result = service(bootcamps, reviews)
            .add_review(identity(Role::User), bootcamp_id, review_input(7))
            .await;

        assert_eq!(result, Err(CoreError::DuplicateField));
    }

    #[tokio::test]
    async fn only_author_or_admin_updates_review() {
        let author = identity(Role::User);
        let review = Review::new(Uuid::new_v4(), author.id(), review_input(4));
        let review_id = review.id;

        let mut reviews = MockReviews::new();
        reviews.expect_get_by_id().returning(move |_| {
            let review = review.clone();
            Box::pin(async move { Ok(Some(review)) })
        });
        reviews.expect_update().never();

        let result = service(MockBootcampRepository::new(), reviews)
            .update_review(identity(Role::User), review_id, UpdateReviewInput::default())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}
