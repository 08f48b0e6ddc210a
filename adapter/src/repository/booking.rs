use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use derive_new::new;
use kernel::model::{
    booking::{
        availability,
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, PlaceId},
    list::PageOptions,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The availability check and the insert must observe the same set
        // of bookings, otherwise two concurrent requests for overlapping
        // dates can both pass the scan before either commits.
        self.set_transaction_serializable(&mut tx).await?;

        {
            let place_exists: bool =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM places WHERE id = $1)")
                    .bind(event.place_id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            if !place_exists {
                return Err(AppError::EntityNotFound(format!(
                    "place ({}) was not found",
                    event.place_id
                )));
            }

            let existing: Vec<(NaiveDateTime, i32)> = sqlx::query_as(
                "SELECT date_start, number_nights FROM place_books WHERE place_id = $1",
            )
            .bind(event.place_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if availability::conflicts(event.date_start, event.number_nights, &existing) {
                return Err(AppError::PlaceUnavailable);
            }
        }

        let booking_id: BookingId = sqlx::query_scalar(
            r#"
                INSERT INTO place_books
                (place_id, user_id, is_validated, date_start, number_nights)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
            "#,
        )
        .bind(event.place_id)
        .bind(event.user_id)
        .bind(event.is_validated)
        .bind(event.date_start)
        .bind(event.number_nights)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn exists(&self, booking_id: BookingId) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM place_books WHERE id = $1)")
            .bind(booking_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT id, place_id, user_id, is_validated, date_start,
                       number_nights, created_at, updated_at
                FROM place_books
                WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn find_by_place_id(
        &self,
        place_id: PlaceId,
        options: PageOptions,
    ) -> AppResult<Vec<Booking>> {
        let rows: Vec<BookingRow> = sqlx::query_as(
            r#"
                SELECT id, place_id, user_id, is_validated, date_start,
                       number_nights, created_at, updated_at
                FROM place_books
                WHERE place_id = $1
                ORDER BY id ASC
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(place_id)
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    // Availability is deliberately not re-checked here: moving date_start
    // or number_nights onto an occupied range is accepted, matching the
    // create-time-only enforcement this API has always had.
    async fn update(&self, event: UpdateBooking) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE place_books
                SET is_validated = COALESCE($2, is_validated),
                    date_start = COALESCE($3, date_start),
                    number_nights = COALESCE($4, number_nights),
                    updated_at = CURRENT_TIMESTAMP
                WHERE id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.is_validated)
        .bind(event.date_start)
        .bind(event.number_nights)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }

        Ok(())
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM place_books WHERE id = $1")
            .bind(booking_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }

        Ok(())
    }
}

impl BookingRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
