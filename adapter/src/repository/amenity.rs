use crate::database::{model::amenity::AmenityRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    amenity::{event::CreateAmenity, Amenity},
    id::{AmenityId, PlaceId},
    list::PageOptions,
};
use kernel::repository::amenity::AmenityRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AmenityRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AmenityRepository for AmenityRepositoryImpl {
    async fn create(&self, event: CreateAmenity) -> AppResult<AmenityId> {
        let taken: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM amenities WHERE name = $1)")
                .bind(&event.name)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::AlreadyExists {
                code: 10003,
                msg: "Amenity already exists",
            });
        }

        let amenity_id: AmenityId =
            sqlx::query_scalar("INSERT INTO amenities (name) VALUES ($1) RETURNING id")
                .bind(&event.name)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(amenity_id)
    }

    async fn exists(&self, amenity_id: AmenityId) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM amenities WHERE id = $1)")
            .bind(amenity_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, amenity_id: AmenityId) -> AppResult<Option<Amenity>> {
        let row: Option<AmenityRow> =
            sqlx::query_as("SELECT id, name, created_at, updated_at FROM amenities WHERE id = $1")
                .bind(amenity_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Amenity::from))
    }

    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<Amenity>> {
        let rows: Vec<AmenityRow> = sqlx::query_as(
            r#"
                SELECT id, name, created_at, updated_at
                FROM amenities
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn delete(&self, amenity_id: AmenityId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM place_amenity WHERE amenity_id = $1")
            .bind(amenity_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query("DELETE FROM amenities WHERE id = $1")
            .bind(amenity_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified amenity not found".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_place_id(
        &self,
        place_id: PlaceId,
        options: PageOptions,
    ) -> AppResult<Vec<Amenity>> {
        let rows: Vec<AmenityRow> = sqlx::query_as(
            r#"
                SELECT a.id, a.name, a.created_at, a.updated_at
                FROM amenities AS a
                INNER JOIN place_amenity AS pa ON pa.amenity_id = a.id
                WHERE pa.place_id = $1
                ORDER BY a.id ASC
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(place_id)
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn attach_to_place(&self, place_id: PlaceId, amenity_id: AmenityId) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO place_amenity (place_id, amenity_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
            "#,
        )
        .bind(place_id)
        .bind(amenity_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn detach_from_place(&self, place_id: PlaceId, amenity_id: AmenityId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM place_amenity WHERE place_id = $1 AND amenity_id = $2")
            .bind(place_id)
            .bind(amenity_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "amenity is not attached to this place".into(),
            ));
        }

        Ok(())
    }
}
