use devcamper_core::domain::review::value_objects::{CreateReviewInput, UpdateReviewInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReviewValidator {
    #[validate(length(min = 1, max = 100, message = "Please add a title of at most 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Please add some text"))]
    pub text: String,

    #[validate(range(min = 1, max = 10, message = "Please add a rating between 1 and 10"))]
    pub rating: i32,
}

impl From<CreateReviewValidator> for CreateReviewInput {
    fn from(payload: CreateReviewValidator) -> Self {
        CreateReviewInput {
            title: payload.title.trim().to_string(),
            text: payload.text,
            rating: payload.rating,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewValidator {
    #[validate(length(min = 1, max = 100, message = "Title can not be more than 100 characters"))]
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub text: Option<String>,

    #[validate(range(min = 1, max = 10, message = "Please add a rating between 1 and 10"))]
    #[serde(default)]
    pub rating: Option<i32>,
}

impl From<UpdateReviewValidator> for UpdateReviewInput {
    fn from(payload: UpdateReviewValidator) -> Self {
        UpdateReviewInput {
            title: payload.title.map(|title| title.trim().to_string()),
            text: payload.text,
            rating: payload.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_bounds_is_rejected() {
        for rating in [0, 11] {
            let payload = CreateReviewValidator {
                title: "Great bootcamp".to_string(),
                text: "Learned a lot".to_string(),
                rating,
            };
            assert!(payload.validate().is_err(), "rating {rating}");
        }

        let update = UpdateReviewValidator {
            rating: Some(10),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
