use devcamper_core::domain::bootcamp::{
    entities::CAREERS,
    value_objects::{CreateBootcampInput, UpdateBootcampInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_careers(careers: &[String]) -> Result<(), ValidationError> {
    if careers.is_empty() {
        return Err(ValidationError::new("careers")
            .with_message("Please add at least one career".into()));
    }

    match careers.iter().find(|c| !CAREERS.contains(&c.as_str())) {
        Some(unknown) => Err(ValidationError::new("careers")
            .with_message(format!("{unknown} is not a known career").into())),
        None => Ok(()),
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBootcampValidator {
    #[validate(length(min = 1, max = 50, message = "Please add a name of at most 50 characters"))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Please add a description of at most 500 characters"
    ))]
    pub description: String,

    #[validate(url(message = "Please use a valid URL with HTTP or HTTPS"))]
    #[serde(default)]
    pub website: Option<String>,

    #[validate(length(max = 20, message = "Phone number can not be longer than 20 characters"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(email(message = "Please add a valid email"))]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Please add an address"))]
    pub address: String,

    #[validate(custom(function = "validate_careers"))]
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

impl From<CreateBootcampValidator> for CreateBootcampInput {
    fn from(payload: CreateBootcampValidator) -> Self {
        CreateBootcampInput {
            name: payload.name.trim().to_string(),
            description: payload.description,
            website: payload.website,
            phone: payload.phone,
            email: payload.email,
            address: payload.address,
            careers: payload.careers,
            housing: payload.housing,
            job_assistance: payload.job_assistance,
            job_guarantee: payload.job_guarantee,
            accept_gi: payload.accept_gi,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBootcampValidator {
    #[validate(length(min = 1, max = 50, message = "Name can not be more than 50 characters"))]
    #[serde(default)]
    pub name: Option<String>,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Description can not be more than 500 characters"
    ))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(url(message = "Please use a valid URL with HTTP or HTTPS"))]
    #[serde(default)]
    pub website: Option<String>,

    #[validate(length(max = 20, message = "Phone number can not be longer than 20 characters"))]
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(email(message = "Please add a valid email"))]
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[validate(custom(function = "validate_careers"))]
    #[serde(default)]
    pub careers: Option<Vec<String>>,

    #[serde(default)]
    pub housing: Option<bool>,

    #[serde(default)]
    pub job_assistance: Option<bool>,

    #[serde(default)]
    pub job_guarantee: Option<bool>,

    #[serde(default)]
    pub accept_gi: Option<bool>,
}

impl From<UpdateBootcampValidator> for UpdateBootcampInput {
    fn from(payload: UpdateBootcampValidator) -> Self {
        UpdateBootcampInput {
            name: payload.name.map(|name| name.trim().to_string()),
            description: payload.description,
            website: payload.website,
            phone: payload.phone,
            email: payload.email,
            address: payload.address,
            careers: payload.careers,
            housing: payload.housing,
            job_assistance: payload.job_assistance,
            job_guarantee: payload.job_guarantee,
            accept_gi: payload.accept_gi,
        }
    }
}
