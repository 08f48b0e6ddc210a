use crate::model::id::{ReviewId, UserId};
use chrono::NaiveDateTime;

pub mod event;

/// A review is authored by `from_user_id` and attached to either a user
/// or a place through its link table; the target never lives on the row
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub message: String,
    pub stars: i32,
    pub from_user_id: UserId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
