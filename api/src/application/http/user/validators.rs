use devcamper_core::domain::user::{
    entities::Role,
    value_objects::{CreateUserInput, UpdateUserInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(length(min = 1, message = "Please add a name"))]
    pub name: String,

    #[validate(email(message = "Please add a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<Role>,
}

impl From<CreateUserValidator> for CreateUserInput {
    fn from(payload: CreateUserValidator) -> Self {
        CreateUserInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            role: payload.role,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserValidator {
    #[validate(length(min = 1, message = "Name can not be empty"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(email(message = "Please add a valid email"))]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Option<Role>,
}

impl From<UpdateUserValidator> for UpdateUserInput {
    fn from(payload: UpdateUserValidator) -> Self {
        UpdateUserInput {
            name: payload.name,
            email: payload.email,
            role: payload.role,
        }
    }
}
