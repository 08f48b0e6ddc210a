use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, PlaceId},
    list::PageOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Creates the booking after re-checking availability; the existence
    /// check, conflict scan and insert run in one serializable transaction.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    async fn exists(&self, booking_id: BookingId) -> AppResult<bool>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    async fn find_by_place_id(
        &self,
        place_id: PlaceId,
        options: PageOptions,
    ) -> AppResult<Vec<Booking>>;
    /// Applies a partial update; availability is deliberately not re-checked.
    async fn update(&self, event: UpdateBooking) -> AppResult<()>;
    async fn delete(&self, booking_id: BookingId) -> AppResult<()>;
}
