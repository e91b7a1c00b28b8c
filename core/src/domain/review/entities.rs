use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    review::value_objects::{CreateReviewInput, UpdateReviewInput},
};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(bootcamp_id: Uuid, user_id: Uuid, input: CreateReviewInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            bootcamp_id,
            user_id,
            title: input.title,
            text: input.text,
            rating: input.rating,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, input: UpdateReviewInput) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(text) = input.text {
            self.text = text;
        }
        if let Some(rating) = input.rating {
            self.rating = rating;
        }
        self.updated_at = Utc::now();
    }
}

pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    Some(ratings.iter().map(|r| *r as f64).sum::<f64>() / ratings.len() as f64)
}
