use devcamper_core::domain::course::{
    entities::MinimumSkill,
    value_objects::{CreateCourseInput, UpdateCourseInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCourseValidator {
    #[validate(length(min = 1, message = "Please add a course title"))]
    pub title: String,

    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: String,

    #[validate(range(min = 1, message = "Please add number of weeks"))]
    pub weeks: i32,

    #[validate(range(min = 0, message = "Please add a tuition cost"))]
    pub tuition: i64,

    pub minimum_skill: MinimumSkill,

    #[serde(default)]
    pub scholarship_available: bool,
}

impl From<CreateCourseValidator> for CreateCourseInput {
    fn from(payload: CreateCourseValidator) -> Self {
        CreateCourseInput {
            title: payload.title.trim().to_string(),
            description: payload.description,
            weeks: payload.weeks,
            tuition: payload.tuition,
            minimum_skill: payload.minimum_skill,
            scholarship_available: payload.scholarship_available,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseValidator {
    #[validate(length(min = 1, message = "Course title can not be empty"))]
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "A course lasts at least one week"))]
    #[serde(default)]
    pub weeks: Option<i32>,

    #[validate(range(min = 0, message = "Tuition can not be negative"))]
    #[serde(default)]
    pub tuition: Option<i64>,

    #[serde(default)]
    pub minimum_skill: Option<MinimumSkill>,

    #[serde(default)]
    pub scholarship_available: Option<bool>,
}

impl From<UpdateCourseValidator> for UpdateCourseInput {
    fn from(payload: UpdateCourseValidator) -> Self {
        UpdateCourseInput {
            title: payload.title.map(|title| title.trim().to_string()),
            description: payload.description,
            weeks: payload.weeks,
            tuition: payload.tuition,
            minimum_skill: payload.minimum_skill,
            scholarship_available: payload.scholarship_available,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn minimum_skill_must_be_a_known_level() {
        let result = serde_json::from_value::<CreateCourseValidator>(json!({
            "title": "Front End Web Development",
            "description": "HTML, CSS and JavaScript",
            "weeks": 8,
            "tuition": 8000,
            "minimum_skill": "guru"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn negative_tuition_is_rejected() {
        let payload: CreateCourseValidator = serde_json::from_value(json!({
            "title": "Full Stack",
            "description": "MERN",
            "weeks": 12,
            "tuition": -1,
            "minimum_skill": "intermediate"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tuition"));
        assert!(!payload.scholarship_available);
    }
}
