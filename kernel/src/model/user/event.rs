use crate::model::id::UserId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

/// Email is immutable; the controller rejects attempts before this event
/// is ever built.
#[derive(Debug, new)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
}
