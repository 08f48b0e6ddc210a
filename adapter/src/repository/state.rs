use crate::database::{model::state::StateRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::StateId,
    list::PageOptions,
    state::{event::CreateState, State},
};
use kernel::repository::state::StateRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct StateRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl StateRepository for StateRepositoryImpl {
    async fn create(&self, event: CreateState) -> AppResult<StateId> {
        let taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM states WHERE name = $1)")
            .bind(&event.name)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::AlreadyExists {
                code: 10001,
                msg: "State already exists",
            });
        }

        let state_id: StateId =
            sqlx::query_scalar("INSERT INTO states (name) VALUES ($1) RETURNING id")
                .bind(&event.name)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(state_id)
    }

    async fn exists(&self, state_id: StateId) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM states WHERE id = $1)")
            .bind(state_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, state_id: StateId) -> AppResult<Option<State>> {
        let row: Option<StateRow> =
            sqlx::query_as("SELECT id, name, created_at, updated_at FROM states WHERE id = $1")
                .bind(state_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(State::from))
    }

    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<State>> {
        let rows: Vec<StateRow> = sqlx::query_as(
            r#"
                SELECT id, name, created_at, updated_at
                FROM states
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn delete(&self, state_id: StateId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM states WHERE id = $1")
            .bind(state_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified state not found".into()));
        }

        Ok(())
    }
}
