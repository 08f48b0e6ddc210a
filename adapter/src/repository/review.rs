use crate::database::{model::review::ReviewRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PlaceId, ReviewId, UserId},
    list::PageOptions,
    review::{event::CreateReview, Review},
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create_for_user(&self, event: CreateReview, user_id: UserId) -> AppResult<ReviewId> {
        let mut tx = self.db.begin().await?;

        let review_id: ReviewId = sqlx::query_scalar(
            r#"
                INSERT INTO reviews (message, stars, from_user_id)
                VALUES ($1, $2, $3)
                RETURNING id
            "#,
        )
        .bind(&event.message)
        .bind(event.stars)
        .bind(event.from_user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query("INSERT INTO review_user (review_id, user_id) VALUES ($1, $2)")
            .bind(review_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(review_id)
    }

    async fn create_for_place(
        &self,
        event: CreateReview,
        place_id: PlaceId,
    ) -> AppResult<ReviewId> {
        let mut tx = self.db.begin().await?;

        let review_id: ReviewId = sqlx::query_scalar(
            r#"
                INSERT INTO reviews (message, stars, from_user_id)
                VALUES ($1, $2, $3)
                RETURNING id
            "#,
        )
        .bind(&event.message)
        .bind(event.stars)
        .bind(event.from_user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query("INSERT INTO review_place (review_id, place_id) VALUES ($1, $2)")
            .bind(review_id)
            .bind(place_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(review_id)
    }

    async fn find_by_user_id(
        &self,
        user_id: UserId,
        options: PageOptions,
    ) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT r.id, r.message, r.stars, r.from_user_id, r.created_at, r.updated_at
                FROM reviews AS r
                INNER JOIN review_user AS ru ON ru.review_id = r.id
                WHERE ru.user_id = $1
                ORDER BY r.id ASC
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn find_by_place_id(
        &self,
        place_id: PlaceId,
        options: PageOptions,
    ) -> AppResult<Vec<Review>> {
        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT r.id, r.message, r.stars, r.from_user_id, r.created_at, r.updated_at
                FROM reviews AS r
                INNER JOIN review_place AS rp ON rp.review_id = r.id
                WHERE rp.place_id = $1
                ORDER BY r.id ASC
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(place_id)
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn find_for_user(
        &self,
        review_id: ReviewId,
        user_id: UserId,
    ) -> AppResult<Option<Review>> {
        let row: Option<ReviewRow> = sqlx::query_as(
            r#"
                SELECT r.id, r.message, r.stars, r.from_user_id, r.created_at, r.updated_at
                FROM reviews AS r
                INNER JOIN review_user AS ru ON ru.review_id = r.id
                WHERE r.id = $1 AND ru.user_id = $2
            "#,
        )
        .bind(review_id)
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Review::from))
    }

    async fn find_for_place(
        &self,
        review_id: ReviewId,
        place_id: PlaceId,
    ) -> AppResult<Option<Review>> {
        let row: Option<ReviewRow> = sqlx::query_as(
            r#"
                SELECT r.id, r.message, r.stars, r.from_user_id, r.created_at, r.updated_at
                FROM reviews AS r
                INNER JOIN review_place AS rp ON rp.review_id = r.id
                WHERE r.id = $1 AND rp.place_id = $2
            "#,
        )
        .bind(review_id)
        .bind(place_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Review::from))
    }

    async fn delete(&self, review_id: ReviewId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM review_user WHERE review_id = $1")
            .bind(review_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        sqlx::query("DELETE FROM review_place WHERE review_id = $1")
            .bind(review_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified review not found".into()));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
