use crate::model::id::UserId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReview {
    pub message: String,
    pub stars: i32,
    pub from_user_id: UserId,
}
