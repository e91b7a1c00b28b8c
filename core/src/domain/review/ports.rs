use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    advanced_results::value_objects::{QueryRequest, ResultEnvelope},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    review::{
        entities::Review,
        value_objects::{CreateReviewInput, UpdateReviewInput},
    },
};

pub trait ReviewService: Send + Sync {
    fn get_reviews(
        &self,
        query: QueryRequest,
    ) -> impl Future<Output = Result<ResultEnvelope, CoreError>> + Send;

    fn get_bootcamp_reviews(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;

    fn get_review(&self, review_id: Uuid) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn add_review(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn update_review(
        &self,
        identity: Identity,
        review_id: Uuid,
        input: UpdateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    /// Fails with [`CoreError::DuplicateField`] when the user already
    /// reviewed the bootcamp.
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;

    fn update(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn ratings_by_bootcamp(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Vec<i32>, CoreError>> + Send;
}
