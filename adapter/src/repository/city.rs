use crate::database::{model::city::CityRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    city::{event::CreateCity, City},
    id::{CityId, StateId},
    list::PageOptions,
};
use kernel::repository::city::CityRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CityRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CityRepository for CityRepositoryImpl {
    async fn create(&self, event: CreateCity) -> AppResult<CityId> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM cities WHERE name = $1 AND state_id = $2)",
        )
        .bind(&event.name)
        .bind(event.state_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::AlreadyExists {
                code: 10002,
                msg: "City already exists",
            });
        }

        let city_id: CityId =
            sqlx::query_scalar("INSERT INTO cities (name, state_id) VALUES ($1, $2) RETURNING id")
                .bind(&event.name)
                .bind(event.state_id)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(city_id)
    }

    async fn exists(&self, city_id: CityId) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM cities WHERE id = $1)")
            .bind(city_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, city_id: CityId) -> AppResult<Option<City>> {
        let row: Option<CityRow> = sqlx::query_as(
            "SELECT id, name, state_id, created_at, updated_at FROM cities WHERE id = $1",
        )
        .bind(city_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(City::from))
    }

    async fn find_by_state_id(
        &self,
        state_id: StateId,
        options: PageOptions,
    ) -> AppResult<Vec<City>> {
        let rows: Vec<CityRow> = sqlx::query_as(
            r#"
                SELECT id, name, state_id, created_at, updated_at
                FROM cities
                WHERE state_id = $1
                ORDER BY id ASC
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(state_id)
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(City::from).collect())
    }

    async fn delete(&self, city_id: CityId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(city_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified city not found".into()));
        }

        Ok(())
    }
}
