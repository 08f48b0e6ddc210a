use chrono::NaiveDateTime;
use kernel::model::{
    booking::Booking,
    id::{BookingId, PlaceId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub id: BookingId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub is_validated: bool,
    pub date_start: NaiveDateTime,
    pub number_nights: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            id,
            place_id,
            user_id,
            is_validated,
            date_start,
            number_nights,
            created_at,
            updated_at,
        } = value;
        Booking {
            id,
            place_id,
            user_id,
            is_validated,
            date_start,
            number_nights,
            created_at,
            updated_at,
        }
    }
}
