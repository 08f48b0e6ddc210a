use crate::model::id::UserId;
use chrono::NaiveDateTime;

pub mod event;

/// The password digest stays in the adapter; nothing above it needs the
/// credential (no authentication exists on this API).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
