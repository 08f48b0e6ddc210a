use chrono::NaiveDateTime;
use kernel::model::{
    id::{ReviewId, UserId},
    review::Review,
};

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub id: ReviewId,
    pub message: String,
    pub stars: i32,
    pub from_user_id: UserId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            id,
            message,
            stars,
            from_user_id,
            created_at,
            updated_at,
        } = value;
        Review {
            id,
            message,
            stars,
            from_user_id,
            created_at,
            updated_at,
        }
    }
}
