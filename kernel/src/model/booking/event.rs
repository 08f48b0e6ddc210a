use crate::model::id::{BookingId, PlaceId, UserId};
use chrono::NaiveDateTime;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub date_start: NaiveDateTime,
    pub is_validated: bool,
    pub number_nights: i32,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, new)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub is_validated: Option<bool>,
    pub date_start: Option<NaiveDateTime>,
    pub number_nights: Option<i32>,
}
