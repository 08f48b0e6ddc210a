use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

#[derive(Debug)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl CreateUserRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::require(body, "email")?;
        validation::require(body, "first_name")?;
        validation::require(body, "last_name")?;
        validation::require(body, "password")?;

        let email = validation::required_email(body, "email")?;
        let first_name = validation::required_string(body, "first_name")?;
        let last_name = validation::required_string(body, "last_name")?;
        let password = validation::required_text(body, "password")?;
        let is_admin = validation::optional_boolean(body, "is_admin")?.unwrap_or(false);

        Ok(Self {
            email,
            password,
            first_name,
            last_name,
            is_admin,
        })
    }
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            email,
            password,
            first_name,
            last_name,
            is_admin,
        } = value;
        CreateUser {
            email,
            password,
            first_name,
            last_name,
            is_admin,
        }
    }
}

#[derive(Debug)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}

impl UpdateUserRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::reject_field(body, "email", "Email cannot be changed")?;

        let first_name = validation::optional_string(body, "first_name")?;
        let last_name = validation::optional_string(body, "last_name")?;
        let password = validation::optional_text(body, "password")?;
        let is_admin = validation::optional_boolean(body, "is_admin")?;

        Ok(Self {
            first_name,
            last_name,
            password,
            is_admin,
        })
    }

    pub fn into_event(self, user_id: UserId) -> UpdateUser {
        let UpdateUserRequest {
            first_name,
            last_name,
            password,
            is_admin,
        } = self;
        UpdateUser::new(user_id, first_name, last_name, password, is_admin)
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            is_admin,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            created_at,
            updated_at,
            email,
            first_name,
            last_name,
            is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::AppError;

    #[test]
    fn create_wants_a_well_shaped_email() {
        let err = CreateUserRequest::parse(&json!({
            "email": "not-an-address",
            "first_name": "Kay",
            "last_name": "Doe",
            "password": "hunter2",
        }))
        .unwrap_err();
        match err {
            AppError::InvalidField(msg) => assert_eq!(msg, "email is not valid"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn create_reports_missing_keys_in_order() {
        let err = CreateUserRequest::parse(&json!({"email": "kay@example.com"})).unwrap_err();
        assert!(matches!(err, AppError::MissingField("first_name")));
    }

    #[test]
    fn update_cannot_touch_the_email() {
        let err = UpdateUserRequest::parse(&json!({"email": "new@example.com"})).unwrap_err();
        assert!(matches!(
            err,
            AppError::ImmutableField("Email cannot be changed")
        ));
    }
}
