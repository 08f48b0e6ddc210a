use crate::model::id::{BookingId, PlaceId, UserId};
use chrono::NaiveDateTime;

pub mod availability;
pub mod event;

/// A stay booked on a place's calendar.
///
/// `place_id` and `user_id` are fixed at creation; only `is_validated`,
/// `date_start` and `number_nights` may change afterwards. For conflict
/// purposes the booking occupies the half-open day range
/// `[date_start at midnight, date_start at midnight + number_nights)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub is_validated: bool,
    pub date_start: NaiveDateTime,
    pub number_nights: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
