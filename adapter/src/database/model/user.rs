use chrono::NaiveDateTime;
use kernel::model::{id::UserId, user::User};

/// The password digest never leaves the adapter.
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            id,
            email,
            first_name,
            last_name,
            is_admin,
            created_at,
            updated_at,
        } = value;
        User {
            id,
            email,
            first_name,
            last_name,
            is_admin,
            created_at,
            updated_at,
        }
    }
}
