use devcamper_core::domain::{
    authentication::value_objects::{LoginInput, RegisterInput},
    user::entities::Role,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(length(min = 1, message = "Please add a name"))]
    pub name: String,

    #[validate(email(message = "Please add a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// `user` or `publisher`; defaults to `user`.
    #[serde(default)]
    pub role: Option<Role>,
}

impl From<RegisterValidator> for RegisterInput {
    fn from(payload: RegisterValidator) -> Self {
        RegisterInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            role: payload.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide an email and password"))]
    pub password: String,
}

impl From<LoginValidator> for LoginInput {
    fn from(payload: LoginValidator) -> Self {
        LoginInput {
            email: payload.email,
            password: payload.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let payload: LoginValidator =
            serde_json::from_str(r#"{"email": "john@gmail.com"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn register_rejects_short_password() {
        let payload = RegisterValidator {
            name: "John Doe".to_string(),
            email: "john@gmail.com".to_string(),
            password: "12345".to_string(),
            role: Some(Role::Publisher),
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
