use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    advanced_results::value_objects::{QueryRequest, ResultEnvelope},
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    course::{
        entities::Course,
        value_objects::{CreateCourseInput, UpdateCourseInput},
    },
};

pub trait CourseService: Send + Sync {
    /// Public listing with the parent bootcamp's name and description inlined.
    fn get_courses(
        &self,
        query: QueryRequest,
    ) -> impl Future<Output = Result<ResultEnvelope, CoreError>> + Send;

    /// Every course of one bootcamp, unpaginated.
    fn get_bootcamp_courses(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;

    fn get_course(&self, course_id: Uuid) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn add_course(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn update_course(
        &self,
        identity: Identity,
        course_id: Uuid,
        input: UpdateCourseInput,
    ) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete_course(
        &self,
        identity: Identity,
        course_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CourseRepository: Send + Sync {
    fn create(&self, course: Course) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;

    fn update(&self, course: Course) -> impl Future<Output = Result<Course, CoreError>> + Send;

    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn tuitions_by_bootcamp(
        &self,
        bootcamp_id: Uuid,
    ) -> impl Future<Output = Result<Vec<i64>, CoreError>> + Send;
}
