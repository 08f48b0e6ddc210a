use crate::model::{
    id::{PlaceId, ReviewId, UserId},
    list::PageOptions,
    review::{event::CreateReview, Review},
};
use async_trait::async_trait;
use shared::error::AppResult;

/// Reviews are always scoped to their target: a review of a user is only
/// visible under that user, a review of a place only under that place.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create_for_user(&self, event: CreateReview, user_id: UserId) -> AppResult<ReviewId>;
    async fn create_for_place(&self, event: CreateReview, place_id: PlaceId)
        -> AppResult<ReviewId>;
    async fn find_by_user_id(
        &self,
        user_id: UserId,
        options: PageOptions,
    ) -> AppResult<Vec<Review>>;
    async fn find_by_place_id(
        &self,
        place_id: PlaceId,
        options: PageOptions,
    ) -> AppResult<Vec<Review>>;
    async fn find_for_user(&self, review_id: ReviewId, user_id: UserId)
        -> AppResult<Option<Review>>;
    async fn find_for_place(
        &self,
        review_id: ReviewId,
        place_id: PlaceId,
    ) -> AppResult<Option<Review>>;
    async fn delete(&self, review_id: ReviewId) -> AppResult<()>;
}
