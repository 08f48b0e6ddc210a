use crate::database::{model::place::PlaceRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::PlaceId,
    list::PageOptions,
    place::{
        event::{CreatePlace, UpdatePlace},
        Place,
    },
};
use kernel::repository::place::PlaceRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PlaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PlaceRepository for PlaceRepositoryImpl {
    async fn create(&self, event: CreatePlace) -> AppResult<PlaceId> {
        let place_id: PlaceId = sqlx::query_scalar(
            r#"
                INSERT INTO places
                (owner_id, city_id, name, description, number_rooms,
                 number_bathrooms, max_guest, price_by_night, latitude, longitude)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING id
            "#,
        )
        .bind(event.owner_id)
        .bind(event.city_id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.number_rooms)
        .bind(event.number_bathrooms)
        .bind(event.max_guest)
        .bind(event.price_by_night)
        .bind(event.latitude)
        .bind(event.longitude)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(place_id)
    }

    async fn exists(&self, place_id: PlaceId) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM places WHERE id = $1)")
            .bind(place_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, place_id: PlaceId) -> AppResult<Option<Place>> {
        let row: Option<PlaceRow> = sqlx::query_as(
            r#"
                SELECT id, owner_id, city_id, name, description, number_rooms,
                       number_bathrooms, max_guest, price_by_night, latitude,
                       longitude, created_at, updated_at
                FROM places
                WHERE id = $1
            "#,
        )
        .bind(place_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Place::from))
    }

    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<Place>> {
        let rows: Vec<PlaceRow> = sqlx::query_as(
            r#"
                SELECT id, owner_id, city_id, name, description, number_rooms,
                       number_bathrooms, max_guest, price_by_night, latitude,
                       longitude, created_at, updated_at
                FROM places
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn update(&self, event: UpdatePlace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE places
                SET name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    number_rooms = COALESCE($4, number_rooms),
                    number_bathrooms = COALESCE($5, number_bathrooms),
                    max_guest = COALESCE($6, max_guest),
                    price_by_night = COALESCE($7, price_by_night),
                    latitude = COALESCE($8, latitude),
                    longitude = COALESCE($9, longitude),
                    updated_at = CURRENT_TIMESTAMP
                WHERE id = $1
            "#,
        )
        .bind(event.place_id)
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.number_rooms)
        .bind(event.number_bathrooms)
        .bind(event.max_guest)
        .bind(event.price_by_night)
        .bind(event.latitude)
        .bind(event.longitude)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified place not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, place_id: PlaceId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(place_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified place not found".into()));
        }

        Ok(())
    }
}
