use serde_json::Value;
use tracing::{error, instrument};
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
    course::{
        entities::{Course, average_cost},
        ports::{CourseRepository, CourseService},
        value_objects::{CreateCourseInput, UpdateCourseInput},
    },
    user::entities::Role,
};

impl<B, C, R, U, H, T, HC> Service<B, C, R, U, H, T, HC>
where
    B: BootcampRepository,
    C: CourseRepository,
{
    /// Recomputes the bootcamp's average cost. Failures are logged only; the
    /// course write that triggered it has already succeeded.
    async fn refresh_average_cost(&self, bootcamp_id: Uuid) {
        let result = async {
            let tuitions = self.course_repository.tuitions_by_bootcamp(bootcamp_id).await?;
            self.bootcamp_repository
                .set_average_cost(bootcamp_id, average_cost(&tuitions))
                .await
        }
        .await;

        if let Err(e) = result {
            error!("Failed to refresh average cost of bootcamp {}: {}", bootcamp_id, e);
        }
    }

    async fn find_course(&self, course_id: Uuid) -> Result<Course, CoreError> {
        self.course_repository
            .get_by_id(course_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl<B, C, R, U, H, T, HC> CourseService for Service<B, C, R, U, H, T, HC>
where
    B: BootcampRepository,
    C: CourseRepository + Collection,
    R: Send + Sync,
    U: Send + Sync,
    H: Send + Sync,
    T: Send + Sync,
    HC: Send + Sync,
{
    async fn get_courses(&self, query: QueryRequest) -> Result<ResultEnvelope, CoreError> {
        advanced_results(&self.course_repository, query, Some(bootcamp_summary())).await
    }

    async fn get_bootcamp_courses(&self, bootcamp_id: Uuid) -> Result<Vec<Value>, CoreError> {
        let filter = FilterSpec::new().with_eq("bootcamp_id", bootcamp_id.to_string());

        self.course_repository
            .find(ListQuery::matching(filter).with_populate(Some(bootcamp_summary())))
            .await
    }

    async fn get_course(&self, course_id: Uuid) -> Result<Value, CoreError> {
        let filter = FilterSpec::new().with_eq("id", course_id.to_string());
        let query = ListQuery::matching(filter)
            .with_populate(Some(bootcamp_summary()))
            .with_limit(1);

        self.course_repository
            .find(query)
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input), fields(user_id = %identity.id()))]
    async fn add_course(
        &self,
        identity: Identity,
        bootcamp_id: Uuid,
        input: CreateCourseInput,
    ) -> Result<Course, CoreError> {
        self.policy
            .ensure_roles(&identity, &[Role::Publisher, Role::Admin])?;

        let bootcamp = self.find_bootcamp(bootcamp_id).await?;
        ensure_policy(
            Ok(self.policy.is_owner_or_admin(&identity, bootcamp.user_id)),
            &format!(
                "User {} is not authorized to add a course to bootcamp {}",
                identity.id(),
                bootcamp.id
            ),
        )?;

        let course = self
            .course_repository
            .create(Course::new(bootcamp.id, identity.id(), input))
            .await?;
        self.refresh_average_cost(bootcamp.id).await;

        Ok(course)
    }

    #[instrument(skip(self, identity, input))]
    async fn update_course(
        &self,
        identity: Identity,
        course_id: Uuid,
        input: UpdateCourseInput,
    ) -> Result<Course, CoreError> {
        self.policy
            .ensure_roles(&identity, &[Role::Publisher, Role::Admin])?;

        let mut course = self.find_course(course_id).await?;
        ensure_policy(
            Ok(self.policy.is_owner_or_admin(&identity, course.user_id)),
            &format!(
                "User {} is not authorized to update course {}",
                identity.id(),
                course.id
            ),
        )?;

        course.apply(input);
        let course = self.course_repository.update(course).await?;
        self.refresh_average_cost(course.bootcamp_id).await;

        Ok(course)
    }

    #[instrument(skip(self, identity))]
    async fn delete_course(&self, identity: Identity, course_id: Uuid) -> Result<(), CoreError> {
        self.policy
            .ensure_roles(&identity, &[Role::Publisher, Role::Admin])?;

        let course = self.find_course(course_id).await?;
        ensure_policy(
            Ok(self.policy.is_owner_or_admin(&identity, course.user_id)),
            &format!(
                "User {} is not authorized to delete course {}",
                identity.id(),
                course.id
            ),
        )?;

        self.course_repository.delete(course.id).await?;
        self.refresh_average_cost(course.bootcamp_id).await;

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
        course::entities::MinimumSkill,
        user::entities::User,
    };

    mock! {
        pub Courses {}

        impl CourseRepository for Courses {
            fn create(&self, course: Course) -> impl Future<Output = Result<Course, CoreError>> + Send;
            fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<Course>, CoreError>> + Send;
            fn update(&self, course: Course) -> impl Future<Output = Result<Course, CoreError>> + Send;
            fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
            fn tuitions_by_bootcamp(&self, bootcamp_id: Uuid) -> impl Future<Output = Result<Vec<i64>, CoreError>> + Send;
        }

        impl Collection for Courses {
            fn model_name(&self) -> &'static str;
            fn count(&self, filter: FilterSpec) -> impl Future<Output = Result<u64, CoreError>> + Send;
            fn find(&self, query: ListQuery) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;
        }
    }

    type CoursesOnly = Service<MockBootcampRepository, MockCourses, (), (), (), (), ()>;

    fn service(bootcamps: MockBootcampRepository, courses: MockCourses) -> CoursesOnly {
        Service::new(bootcamps, courses, (), (), (), (), ())
    }

    fn identity(role: Role) -> Identity {
        Identity::new(User::new("Pub".into(), "pub@example.com".into(), role))
    }

    fn bootcamp_of(owner: Uuid) -> Bootcamp {
        Bootcamp::new(
            owner,
            CreateBootcampInput {
                name: "Devworks Bootcamp".into(),
                description: "Full stack".into(),
                website: None,
                phone: None,
                email: None,
                address: "Boston MA".into(),
                careers: vec![],
                housing: false,
                job_assistance: false,
                job_guarantee: false,
                accept_gi: false,
            },
        )
    }

    fn course_input() -> CreateCourseInput {
        CreateCourseInput {
            title: "Front End Web Development".into(),
            description: "HTML, CSS and JavaScript".into(),
            weeks: 8,
            tuition: 8001,
            minimum_skill: MinimumSkill::Beginner,
            scholarship_available: true,
        }
    }

    #[tokio::test]
    async fn adding_a_course_refreshes_average_cost() {
        let owner = identity(Role::Publisher);
        let bootcamp = bootcamp_of(owner.id());
        let bootcamp_id = bootcamp.id;

        let mut bootcamps = MockBootcampRepository::new();
        bootcamps.expect_get_by_id().returning(move |_| {
            let bootcamp = bootcamp.clone();
            Box::pin(async move { Ok(Some(bootcamp)) })
        });
        bootcamps
            .expect_set_average_cost()
            .with(eq(bootcamp_id), eq(Some(8010.0)))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut courses = MockCourses::new();
        courses
            .expect_create()
            .returning(|course| Box::pin(async move { Ok(course) }));
        courses
            .expect_tuitions_by_bootcamp()
            .returning(|_| Box::pin(async { Ok(vec![8000, 8001]) }));

        let course = service(bootcamps, courses)
            .add_course(owner.clone(), bootcamp_id, course_input())
            .await
            .unwrap();

        assert_eq!(course.bootcamp_id, bootcamp_id);
        assert_eq!(course.user_id, owner.id());
    }

    #[tokio::test]
    async fn foreign_publisher_cannot_add_course() {
        let bootcamp = bootcamp_of(Uuid::new_v4());
        let bootcamp_id = bootcamp.id;

        let mut bootcamps = MockBootcampRepository::new();
        bootcamps.expect_get_by_id().returning(move |_| {
            let bootcamp = bootcamp.clone();
            Box::pin(async move { Ok(Some(bootcamp)) })
        });
        let mut courses = MockCourses::new();
        courses.expect_create().never();

        let result = service(bootcamps, courses)
            .add_course(identity(Role::Publisher), bootcamp_id, course_input())
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn course_for_missing_bootcamp_is_not_found() {
        let mut bootcamps = MockBootcampRepository::new();
        bootcamps
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(bootcamps, MockCourses::new())
            .add_course(identity(Role::Admin), Uuid::new_v4(), course_input())
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn single_course_is_looked_up_by_id_with_bootcamp() {
        let course_id = Uuid::new_v4();
        let mut courses = MockCourses::new();
        courses
            .expect_find()
            .withf(move |query| {
                query.limit == Some(1)
                    && query.populate == Some(bootcamp_summary())
                    && query.filter == FilterSpec::new().with_eq("id", course_id.to_string())
            })
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let result = service(MockBootcampRepository::new(), courses)
            .get_course(course_id)
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
