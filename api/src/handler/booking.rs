use super::{ensure_place_exists, ensure_user_exists};
use crate::model::booking::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::model::pagination::{ListQuery, PageResponse};
use crate::model::{CreatedResponse, OperationResponse};
use crate::validation::parse_path_id;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::{
    booking::Booking,
    id::{BookingId, PlaceId},
};
use registry::AppRegistry;
use serde_json::Value;
use shared::error::{AppError, AppResult};

pub async fn list_place_bookings(
    Path(place_id): Path<String>,
    Query(query): Query<ListQuery>,
    OriginalUri(uri): OriginalUri,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PageResponse<BookingResponse>>> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    let bookings = registry
        .booking_repository()
        .find_by_place_id(place_id, query.to_page_options())
        .await?;

    let data = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(Json(PageResponse::new(data, uri.path(), &query)))
}

pub async fn book_place(
    Path(place_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<CreatedResponse<BookingId>>)> {
    let place_id: PlaceId = parse_path_id(&place_id, "place")?;
    ensure_place_exists(&registry, place_id).await?;

    let req = CreateBookingRequest::parse(&body)?;
    ensure_user_exists(&registry, req.user_id).await?;

    // The repository re-reads this place's bookings and runs the conflict
    // scan inside its own transaction; an occupied range comes back as the
    // distinct unavailable error, not a validation failure.
    let booking_id = registry
        .booking_repository()
        .create(req.into_event(place_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            booking_id,
            "Booking of place was created successfully",
        )),
    ))
}

pub async fn show_booking(
    Path((place_id, book_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking = find_scoped_booking(&registry, &place_id, &book_id).await?;
    Ok(Json(BookingResponse::from(booking)))
}

pub async fn update_booking(
    Path((place_id, book_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
    Json(body): Json<Value>,
) -> AppResult<Json<OperationResponse>> {
    let booking = find_scoped_booking(&registry, &place_id, &book_id).await?;

    let req = UpdateBookingRequest::parse(&body)?;
    registry
        .booking_repository()
        .update(req.into_event(booking.id))
        .await?;

    Ok(Json(OperationResponse::ok(
        "Booking of place was updated successfully",
    )))
}

pub async fn delete_booking(
    Path((place_id, book_id)): Path<(String, String)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OperationResponse>> {
    let booking = find_scoped_booking(&registry, &place_id, &book_id).await?;

    registry.booking_repository().delete(booking.id).await?;

    Ok(Json(OperationResponse::ok(
        "Booking was deleted successfully",
    )))
}

/// Three separate checks, each its own 404: the place, the booking at all,
/// and the booking on this particular place.
async fn find_scoped_booking(
    registry: &AppRegistry,
    place_id: &str,
    book_id: &str,
) -> AppResult<Booking> {
    let place_id: PlaceId = parse_path_id(place_id, "place")?;
    let book_id: BookingId = parse_path_id(book_id, "booking")?;

    ensure_place_exists(registry, place_id).await?;

    if !registry.booking_repository().exists(book_id).await? {
        return Err(AppError::EntityNotFound(format!(
            "booking ({book_id}) was not found"
        )));
    }

    let booking = registry
        .booking_repository()
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("booking ({book_id}) was not found")))?;

    if booking.place_id != place_id {
        return Err(AppError::EntityNotFound(format!(
            "booking ({book_id}) does not belong to place ({place_id})"
        )));
    }

    Ok(booking)
}

#[cfg(test)]
mod tests {
    use crate::route::booking::build_booking_routers;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::{NaiveDate, NaiveDateTime};
    use kernel::model::booking::Booking;
    use kernel::model::id::{BookingId, PlaceId, UserId};
    use kernel::repository::{
        amenity::MockAmenityRepository, booking::MockBookingRepository, city::MockCityRepository,
        health::MockHealthCheckRepository, place::MockPlaceRepository,
        review::MockReviewRepository, state::MockStateRepository, user::MockUserRepository,
    };
    use registry::AppRegistry;
    use serde_json::{json, Value};
    use shared::error::AppError;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn registry_with(
        place: MockPlaceRepository,
        user: MockUserRepository,
        booking: MockBookingRepository,
    ) -> AppRegistry {
        AppRegistry::from_parts(
            Arc::new(MockHealthCheckRepository::new()),
            Arc::new(MockStateRepository::new()),
            Arc::new(MockCityRepository::new()),
            Arc::new(user),
            Arc::new(place),
            Arc::new(MockAmenityRepository::new()),
            Arc::new(MockReviewRepository::new()),
            Arc::new(booking),
        )
    }

    async fn send(
        registry: AppRegistry,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let app = build_booking_routers().with_state(registry);
        let request = match body {
            Some(v) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn stored_booking() -> Booking {
        Booking {
            id: BookingId::new(1),
            place_id: PlaceId::new(1),
            user_id: UserId::new(2),
            is_validated: false,
            date_start: date(2024, 3, 10, 14, 30, 0),
            number_nights: 2,
            created_at: date(2024, 3, 1, 9, 0, 0),
            updated_at: date(2024, 3, 1, 9, 0, 0),
        }
    }

    #[tokio::test]
    async fn booking_a_free_place_returns_201_with_the_new_id() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let mut user = MockUserRepository::new();
        user.expect_exists().returning(|_| Ok(true));
        let mut booking = MockBookingRepository::new();
        booking
            .expect_create()
            .withf(|event| {
                event.place_id == PlaceId::new(1)
                    && event.user_id == UserId::new(2)
                    && event.number_nights == 2
                    && !event.is_validated
            })
            .returning(|_| Ok(BookingId::new(1)));

        let (status, body) = send(
            registry_with(place, user, booking),
            Method::POST,
            "/places/1/books",
            Some(json!({
                "user_id": 2,
                "date_start": "2024/01/10 00:00:00",
                "number_nights": 2,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["code"], 201);
        assert_eq!(body["id"], 1);
        assert_eq!(body["msg"], "Booking of place was created successfully");
    }

    #[tokio::test]
    async fn an_occupied_date_range_comes_back_as_410() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let mut user = MockUserRepository::new();
        user.expect_exists().returning(|_| Ok(true));
        let mut booking = MockBookingRepository::new();
        booking
            .expect_create()
            .returning(|_| Err(AppError::PlaceUnavailable));

        let (status, body) = send(
            registry_with(place, user, booking),
            Method::POST,
            "/places/1/books",
            Some(json!({
                "user_id": 2,
                "date_start": "2024/01/11 00:00:00",
                "number_nights": 1,
            })),
        )
        .await;

        assert_eq!(status, StatusCode::GONE);
        assert_eq!(body["code"], 110_000);
        assert_eq!(body["msg"], "Place unavailable at this date");
    }

    #[tokio::test]
    async fn a_missing_date_start_is_a_400_before_any_lookup() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        // no expectations on user or booking: parsing must fail first
        let user = MockUserRepository::new();
        let booking = MockBookingRepository::new();

        let (status, body) = send(
            registry_with(place, user, booking),
            Method::POST,
            "/places/1/books",
            Some(json!({"user_id": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 40000);
        assert_eq!(body["msg"], "'date_start' is missing");
    }

    #[tokio::test]
    async fn an_unknown_referenced_user_is_a_404() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let mut user = MockUserRepository::new();
        user.expect_exists().returning(|_| Ok(false));
        let booking = MockBookingRepository::new();

        let (status, _) = send(
            registry_with(place, user, booking),
            Method::POST,
            "/places/1/books",
            Some(json!({
                "user_id": 9,
                "date_start": "2024/01/10 00:00:00",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn an_unknown_place_404s_before_anything_else_runs() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(false));
        // the booking repository must never be touched
        let user = MockUserRepository::new();
        let booking = MockBookingRepository::new();

        let (status, _) = send(
            registry_with(place, user, booking),
            Method::GET,
            "/places/404/books/1",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn a_malformed_place_id_reads_as_not_found() {
        // parse failure resolves before any repository call
        let place = MockPlaceRepository::new();
        let user = MockUserRepository::new();
        let booking = MockBookingRepository::new();

        let (status, _) = send(
            registry_with(place, user, booking),
            Method::GET,
            "/places/somewhere/books",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn a_booking_on_another_place_is_invisible_under_this_one() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let user = MockUserRepository::new();
        let mut booking = MockBookingRepository::new();
        booking.expect_exists().returning(|_| Ok(true));
        booking.expect_find_by_id().returning(|_| {
            let mut stored = stored_booking();
            stored.place_id = PlaceId::new(7);
            Ok(Some(stored))
        });

        let (status, _) = send(
            registry_with(place, user, booking),
            Method::GET,
            "/places/1/books/1",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn reading_a_booking_returns_wire_formatted_dates() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let user = MockUserRepository::new();
        let mut booking = MockBookingRepository::new();
        booking.expect_exists().returning(|_| Ok(true));
        booking
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_booking())));

        let registry = registry_with(place, user, booking);
        let (status, body) = send(registry.clone(), Method::GET, "/places/1/books/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["user_id"], 2);
        assert_eq!(body["date_start"], "2024/03/10 14:30:00");
        assert_eq!(body["number_nights"], 2);

        // absent intervening writes, a second read is identical
        let (_, again) = send(registry, Method::GET, "/places/1/books/1", None).await;
        assert_eq!(body, again);
    }

    #[tokio::test]
    async fn touching_user_id_on_update_is_forbidden() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let user = MockUserRepository::new();
        let mut booking = MockBookingRepository::new();
        booking.expect_exists().returning(|_| Ok(true));
        booking
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_booking())));
        // no expect_update: the request must die before persisting

        let (status, body) = send(
            registry_with(place, user, booking),
            Method::PUT,
            "/places/1/books/1",
            Some(json!({"user_id": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], 403);
        assert_eq!(body["msg"], "User cannot be changed");
    }

    #[tokio::test]
    async fn updating_mutable_fields_succeeds() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let user = MockUserRepository::new();
        let mut booking = MockBookingRepository::new();
        booking.expect_exists().returning(|_| Ok(true));
        booking
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_booking())));
        booking
            .expect_update()
            .withf(|event| {
                event.booking_id == BookingId::new(1)
                    && event.is_validated == Some(true)
                    && event.number_nights == Some(3)
                    && event.date_start.is_none()
            })
            .returning(|_| Ok(()));

        let (status, body) = send(
            registry_with(place, user, booking),
            Method::PUT,
            "/places/1/books/1",
            Some(json!({"is_validated": true, "number_nights": 3})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 200);
        assert_eq!(body["msg"], "Booking of place was updated successfully");
    }

    #[tokio::test]
    async fn deleting_twice_404s_the_second_time() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let user = MockUserRepository::new();
        let mut booking = MockBookingRepository::new();
        // first call sees the row, second call does not
        let mut remaining = 1;
        booking.expect_exists().returning(move |_| {
            let present = remaining > 0;
            remaining -= 1;
            Ok(present)
        });
        booking
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_booking())));
        booking.expect_delete().returning(|_| Ok(()));

        let registry = registry_with(place, user, booking);

        let (status, body) = send(
            registry.clone(),
            Method::DELETE,
            "/places/1/books/1",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "Booking was deleted successfully");

        let (status, _) = send(registry, Method::DELETE, "/places/1/books/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn listing_wraps_bookings_in_the_paging_envelope() {
        let mut place = MockPlaceRepository::new();
        place.expect_exists().returning(|_| Ok(true));
        let user = MockUserRepository::new();
        let mut booking = MockBookingRepository::new();
        booking
            .expect_find_by_place_id()
            .withf(|_, options| options.limit == 10 && options.offset == 0)
            .returning(|_, _| Ok(vec![stored_booking()]));

        let (status, body) = send(
            registry_with(place, user, booking),
            Method::GET,
            "/places/1/books",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["date_start"], "2024/03/10 14:30:00");
        assert_eq!(body["paging"]["prev"], Value::Null);
        assert_eq!(body["paging"]["next"], "/places/1/books?page=2&number=10");
    }
}
