use uuid::Uuid;

use crate::domain::{
    advanced_results::value_objects::{QueryRequest, ResultEnvelope},
    authentication::value_objects::Identity,
    bootcamp::{
        entities::Bootcamp,
        value_objects::{CreateBootcampInput, UpdateBootcampInput},
    },
    common::entities::app_errors::CoreError,
};

pub trait BootcampService: Send + Sync {
    /// Public listing, each bootcamp carrying its courses.
    fn get_bootcamps(
        &self,
        query: QueryRequest,
    ) -> impl Future<Output = Result<ResultEnvelope, CoreError>> + Send;

    fn get_bootcamp(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn create_bootcamp(
        &self,
        identity: Identity,
        input: CreateBootcampInput,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn update_bootcamp(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: UpdateBootcampInput,
    ) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn delete_bootcamp(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BootcampRepository: Send + Sync {
    fn create(&self, bootcamp: Bootcamp) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Bootcamp>, CoreError>> + Send;

    fn update(&self, bootcamp: Bootcamp) -> impl Future<Output = Result<Bootcamp, CoreError>> + Send;

    /// Deletes the bootcamp; its courses and reviews go with it.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn count_by_owner(&self, user_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn set_average_rating(
        &self,
        id: Uuid,
        average_rating: Option<f64>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn set_average_cost(
        &self,
        id: Uuid,
        average_cost: Option<f64>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
