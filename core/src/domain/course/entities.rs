use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    course::value_objects::{CreateCourseInput, UpdateCourseInput},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MinimumSkill {
    Beginner,
    Intermediate,
    Advanced,
}

impl MinimumSkill {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinimumSkill::Beginner => "beginner",
            MinimumSkill::Intermediate => "intermediate",
            MinimumSkill::Advanced => "advanced",
        }
    }
}

impl Display for MinimumSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MinimumSkill {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(MinimumSkill::Beginner),
            "intermediate" => Ok(MinimumSkill::Intermediate),
            "advanced" => Ok(MinimumSkill::Advanced),
            other => Err(CoreError::Invalid(format!("Unknown skill level {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: Uuid,
    pub bootcamp_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: i64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    pub fn new(bootcamp_id: Uuid, user_id: Uuid, input: CreateCourseInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            bootcamp_id,
            user_id,
            title: input.title,
            description: input.description,
            weeks: input.weeks,
            tuition: input.tuition,
            minimum_skill: input.minimum_skill,
            scholarship_available: input.scholarship_available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, input: UpdateCourseInput) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(weeks) = input.weeks {
            self.weeks = weeks;
        }
        if let Some(tuition) = input.tuition {
            self.tuition = tuition;
        }
        if let Some(minimum_skill) = input.minimum_skill {
            self.minimum_skill = minimum_skill;
        }
        if let Some(scholarship_available) = input.scholarship_available {
            self.scholarship_available = scholarship_available;
        }
        self.updated_at = Utc::now();
    }
}

/// Mean tuition rounded up to the next multiple of ten.
pub fn average_cost(tuitions: &[i64]) -> Option<f64> {
    if tuitions.is_empty() {
        return None;
    }

    let mean = tuitions.iter().sum::<i64>() as f64 / tuitions.len() as f64;
    Some((mean / 10.0).ceil() * 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_cost_rounds_up_to_tens() {
        assert_eq!(average_cost(&[]), None);
        assert_eq!(average_cost(&[10000]), Some(10000.0));
        assert_eq!(average_cost(&[8000, 8001]), Some(8010.0));
        assert_eq!(average_cost(&[12500, 2500]), Some(7500.0));
    }

    #[test]
    fn skill_names_are_lowercase() {
        assert_eq!("intermediate".parse::<MinimumSkill>(), Ok(MinimumSkill::Intermediate));
        assert_eq!(
            serde_json::to_value(MinimumSkill::Advanced).unwrap(),
            serde_json::json!("advanced")
        );
        assert!("expert".parse::<MinimumSkill>().is_err());
    }
}
