use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, PlaceId, UserId},
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

#[derive(Debug)]
pub struct CreateBookingRequest {
    pub user_id: UserId,
    pub date_start: NaiveDateTime,
    pub is_validated: bool,
    pub number_nights: i32,
}

impl CreateBookingRequest {
    /// Checks run in contract order: presence of both required keys, then
    /// every field's type. The first failure wins.
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::require(body, "user_id")?;
        validation::require(body, "date_start")?;

        let user_id = validation::required_integer(body, "user_id")?;
        let date_start = validation::required_datetime(body, "date_start")?;
        let is_validated = validation::optional_boolean(body, "is_validated")?.unwrap_or(false);
        let number_nights = validation::optional_integer(body, "number_nights")?.unwrap_or(1);

        Ok(Self {
            user_id: UserId::new(user_id),
            date_start,
            is_validated,
            number_nights,
        })
    }

    pub fn into_event(self, place_id: PlaceId) -> CreateBooking {
        let CreateBookingRequest {
            user_id,
            date_start,
            is_validated,
            number_nights,
        } = self;
        CreateBooking::new(place_id, user_id, date_start, is_validated, number_nights)
    }
}

#[derive(Debug)]
pub struct UpdateBookingRequest {
    pub is_validated: Option<bool>,
    pub date_start: Option<NaiveDateTime>,
    pub number_nights: Option<i32>,
}

impl UpdateBookingRequest {
    /// The booking's user is fixed for life; a body that mentions it at
    /// all is rejected before any field is applied.
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::reject_field(body, "user_id", "User cannot be changed")?;

        let is_validated = validation::optional_boolean(body, "is_validated")?;
        let date_start = validation::optional_datetime(body, "date_start")?;
        let number_nights = validation::optional_integer(body, "number_nights")?;

        Ok(Self {
            is_validated,
            date_start,
            number_nights,
        })
    }

    pub fn into_event(self, booking_id: BookingId) -> UpdateBooking {
        let UpdateBookingRequest {
            is_validated,
            date_start,
            number_nights,
        } = self;
        UpdateBooking::new(booking_id, is_validated, date_start, number_nights)
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: BookingId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub is_validated: bool,
    #[serde(with = "super::wire_date")]
    pub date_start: NaiveDateTime,
    pub number_nights: i32,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            place_id,
            user_id,
            is_validated,
            date_start,
            number_nights,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            created_at,
            updated_at,
            place_id,
            user_id,
            is_validated,
            date_start,
            number_nights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use shared::error::AppError;

    #[test]
    fn create_applies_documented_defaults() {
        let req = CreateBookingRequest::parse(&json!({
            "user_id": 2,
            "date_start": "2024/01/10 00:00:00",
        }))
        .unwrap();
        assert_eq!(req.user_id, UserId::new(2));
        assert!(!req.is_validated);
        assert_eq!(req.number_nights, 1);
    }

    #[test]
    fn create_accepts_string_transported_values() {
        let req = CreateBookingRequest::parse(&json!({
            "user_id": "2",
            "date_start": "2024/03/10 14:30:00",
            "is_validated": "true",
            "number_nights": "3",
        }))
        .unwrap();
        assert_eq!(req.user_id, UserId::new(2));
        assert!(req.is_validated);
        assert_eq!(req.number_nights, 3);
        assert_eq!(
            req.date_start,
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn create_without_date_start_is_a_missing_field() {
        let err = CreateBookingRequest::parse(&json!({"user_id": 2})).unwrap_err();
        assert!(matches!(err, AppError::MissingField("date_start")));
    }

    #[test]
    fn create_without_user_id_is_reported_before_date_start() {
        let err = CreateBookingRequest::parse(&json!({})).unwrap_err();
        assert!(matches!(err, AppError::MissingField("user_id")));
    }

    #[test]
    fn create_rejects_badly_typed_fields_by_name() {
        let err = CreateBookingRequest::parse(&json!({
            "user_id": "guest",
            "date_start": "2024/01/10 00:00:00",
        }))
        .unwrap_err();
        match err {
            AppError::InvalidField(msg) => assert_eq!(msg, "user_id is not an integer"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = CreateBookingRequest::parse(&json!({
            "user_id": 2,
            "date_start": "2024-01-10 00:00:00",
        }))
        .unwrap_err();
        match err {
            AppError::InvalidField(msg) => assert_eq!(msg, "date_start is not formatted correctly"),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = CreateBookingRequest::parse(&json!({
            "user_id": 2,
            "date_start": "2024/01/10 00:00:00",
            "is_validated": "yes",
        }))
        .unwrap_err();
        match err {
            AppError::InvalidField(msg) => assert_eq!(msg, "is_validated is not a boolean"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn update_rejects_any_attempt_to_change_the_user() {
        let err = UpdateBookingRequest::parse(&json!({"user_id": 5})).unwrap_err();
        assert!(matches!(
            err,
            AppError::ImmutableField("User cannot be changed")
        ));
    }

    #[test]
    fn update_with_no_fields_is_a_no_op_event() {
        let req = UpdateBookingRequest::parse(&json!({})).unwrap();
        assert!(req.is_validated.is_none());
        assert!(req.date_start.is_none());
        assert!(req.number_nights.is_none());
    }

    #[test]
    fn booking_serializes_with_wire_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let response = BookingResponse::from(Booking {
            id: BookingId::new(1),
            place_id: PlaceId::new(1),
            user_id: UserId::new(2),
            is_validated: false,
            date_start: date,
            number_nights: 2,
            created_at: date,
            updated_at: date,
        });
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["date_start"], "2024/03/10 14:30:00");
        assert_eq!(body["place_id"], 1);
        assert_eq!(body["user_id"], 2);
    }
}
