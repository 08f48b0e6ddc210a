use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    id::{ReviewId, UserId},
    review::{event::CreateReview, Review},
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

/// `user_id` in the body is the author; the reviewed user or place comes
/// from the route.
#[derive(Debug)]
pub struct CreateReviewRequest {
    pub from_user_id: UserId,
    pub message: String,
    pub stars: i32,
}

impl CreateReviewRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::require(body, "user_id")?;
        validation::require(body, "message")?;

        let from_user_id = validation::required_integer(body, "user_id")?;
        let message = validation::required_text(body, "message")?;
        let stars = validation::optional_integer(body, "stars")?.unwrap_or(0);

        Ok(Self {
            from_user_id: UserId::new(from_user_id),
            message,
            stars,
        })
    }

    pub fn into_event(self) -> CreateReview {
        let CreateReviewRequest {
            from_user_id,
            message,
            stars,
        } = self;
        CreateReview::new(message, stars, from_user_id)
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: ReviewId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
    pub message: String,
    pub stars: i32,
    pub from_user_id: UserId,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            id,
            message,
            stars,
            from_user_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            created_at,
            updated_at,
            message,
            stars,
            from_user_id,
        }
    }
}
