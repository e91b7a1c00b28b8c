//! Bulk import and removal of fixture data, used by the `seed` command.

use std::path::Path;

use anyhow::Context;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    bootcamp::{entities::Bootcamp, ports::BootcampRepository, value_objects::CreateBootcampInput},
    course::{
        entities::{Course, MinimumSkill, average_cost},
        ports::CourseRepository,
        value_objects::CreateCourseInput,
    },
    crypto::ports::HasherRepository,
    review::{
        entities::{Review, average_rating},
        ports::ReviewRepository,
        value_objects::CreateReviewInput,
    },
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};
use crate::entity::prelude::{Bootcamps, Courses, Reviews, Users};
use crate::infrastructure::{
    bootcamp::repositories::bootcamp_repository::PostgresBootcampRepository,
    course::repositories::course_repository::PostgresCourseRepository,
    crypto::Argon2HasherRepository,
    review::repositories::review_repository::PostgresReviewRepository,
    user::repositories::user_repository::PostgresUserRepository,
};

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedBootcamp {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: String,
    #[serde(default)]
    pub careers: Vec<String>,
    #[serde(default)]
    pub housing: bool,
    #[serde(default)]
    pub job_assistance: bool,
    #[serde(default)]
    pub job_guarantee: bool,
    #[serde(default)]
    pub accept_gi: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedCourse {
    pub id: Option<Uuid>,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i64,
    pub minimum_skill: MinimumSkill,
    #[serde(default)]
    pub scholarship_available: bool,
}

#[derive(Debug, Deserialize)]
pub struct SeedReview {
    pub id: Option<Uuid>,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub bootcamps: usize,
    pub courses: usize,
    pub reviews: usize,
}

pub struct Seeder {
    db: DatabaseConnection,
    users: PostgresUserRepository,
    bootcamps: PostgresBootcampRepository,
    courses: PostgresCourseRepository,
    reviews: PostgresReviewRepository,
    hasher: Argon2HasherRepository,
}

impl Seeder {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: PostgresUserRepository::new(db.clone()),
            bootcamps: PostgresBootcampRepository::new(db.clone()),
            courses: PostgresCourseRepository::new(db.clone()),
            reviews: PostgresReviewRepository::new(db.clone()),
            hasher: Argon2HasherRepository::new(),
            db,
        }
    }

    /// Loads `users.json`, `bootcamps.json`, `courses.json` and
    /// `reviews.json` from `dir`; missing files are skipped.
    pub async fn import(&self, dir: &Path) -> Result<SeedReport, anyhow::Error> {
        let mut report = SeedReport::default();

        for seed in read_seed::<SeedUser>(dir, "users.json").await? {
            let mut user = User::new(seed.name, seed.email, seed.role);
            if let Some(id) = seed.id {
                user.id = id;
            }
            let password_hash = self.hasher.hash_password(seed.password).await?;
            self.users.create(user, password_hash).await?;
            report.users += 1;
        }

        let mut bootcamp_ids = Vec::new();
        for seed in read_seed::<SeedBootcamp>(dir, "bootcamps.json").await? {
            let mut bootcamp = Bootcamp::new(
                seed.user_id,
                CreateBootcampInput {
                    name: seed.name,
                    description: seed.description,
                    website: seed.website,
                    phone: seed.phone,
                    email: seed.email,
                    address: seed.address,
                    careers: seed.careers,
                    housing: seed.housing,
                    job_assistance: seed.job_assistance,
                    job_guarantee: seed.job_guarantee,
                    accept_gi: seed.accept_gi,
                },
            );
            if let Some(id) = seed.id {
                bootcamp.id = id;
            }
            bootcamp_ids.push(self.bootcamps.create(bootcamp).await?.id);
            report.bootcamps += 1;
        }

        for seed in read_seed::<SeedCourse>(dir, "courses.json").await? {
            let mut course = Course::new(
                seed.bootcamp_id,
                seed.user_id,
                CreateCourseInput {
                    title: seed.title,
                    description: seed.description,
                    weeks: seed.weeks,
                    tuition: seed.tuition,
                    minimum_skill: seed.minimum_skill,
                    scholarship_available: seed.scholarship_available,
                },
            );
            if let Some(id) = seed.id {
                course.id = id;
            }
            self.courses.create(course).await?;
            report.courses += 1;
        }

        for seed in read_seed::<SeedReview>(dir, "reviews.json").await? {
            let mut review = Review::new(
                seed.bootcamp_id,
                seed.user_id,
                CreateReviewInput {
                    title: seed.title,
                    text: seed.text,
                    rating: seed.rating,
                },
            );
            if let Some(id) = seed.id {
                review.id = id;
            }
            self.reviews.create(review).await?;
            report.reviews += 1;
        }

        for id in bootcamp_ids {
            let tuitions = self.courses.tuitions_by_bootcamp(id).await?;
            self.bootcamps
                .set_average_cost(id, average_cost(&tuitions))
                .await?;
            let ratings = self.reviews.ratings_by_bootcamp(id).await?;
            self.bootcamps
                .set_average_rating(id, average_rating(&ratings))
                .await?;
        }

        info!(?report, "seed data imported");
        Ok(report)
    }

    /// Deletes every row, children first.
    pub async fn destroy(&self) -> Result<(), anyhow::Error> {
        Reviews::delete_many().exec(&self.db).await?;
        Courses::delete_many().exec(&self.db).await?;
        Bootcamps::delete_many().exec(&self.db).await?;
        Users::delete_many().exec(&self.db).await?;

        info!("seed data destroyed");
        Ok(())
    }
}

async fn read_seed<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, anyhow::Error> {
    let path = dir.join(file);
    if !tokio::fs::try_exists(&path).await? {
        return Ok(Vec::new());
    }

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_fill_defaults() {
        let bootcamp: SeedBootcamp = serde_json::from_str(
            r#"{
                "user_id": "5d7a514b-5d2c-4b8f-8b5a-1a2b3c4d5e6f",
                "name": "Devworks Bootcamp",
                "description": "Full stack",
                "address": "Boston MA",
                "careers": ["Web Development", "UI/UX"]
            }"#,
        )
        .unwrap();

        assert_eq!(bootcamp.id, None);
        assert_eq!(bootcamp.careers.len(), 2);
        assert!(!bootcamp.housing);

        let user: SeedUser =
            serde_json::from_str(r#"{"name":"A","email":"a@b.c","password":"123456"}"#).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn missing_seed_file_is_empty() {
        let dir = std::env::temp_dir().join(format!("devcamper-seed-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(
            dir.join("reviews.json"),
            r#"[{"bootcamp_id":"5d7a514b-5d2c-4b8f-8b5a-1a2b3c4d5e6f","user_id":"5d7a514b-5d2c-4b8f-8b5a-1a2b3c4d5e60","title":"t","text":"x","rating":8}]"#,
        )
        .await
        .unwrap();

        let users: Vec<SeedUser> = read_seed(&dir, "users.json").await.unwrap();
        let reviews: Vec<SeedReview> = read_seed(&dir, "reviews.json").await.unwrap();

        assert!(users.is_empty());
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].rating, 8);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
