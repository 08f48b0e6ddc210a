use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    list::PageOptions,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use sha2::{Digest, Sha256};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let taken: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(&event.email)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if taken {
            return Err(AppError::AlreadyExists {
                code: 10000,
                msg: "Email already exists",
            });
        }

        let user_id: UserId = sqlx::query_scalar(
            r#"
                INSERT INTO users (email, password, first_name, last_name, is_admin)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
            "#,
        )
        .bind(&event.email)
        .bind(digest_password(&event.password))
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(event.is_admin)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(user_id)
    }

    async fn exists(&self, user_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, email, first_name, last_name, is_admin, created_at, updated_at
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT id, email, first_name, last_name, is_admin, created_at, updated_at
                FROM users
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, event: UpdateUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET first_name = COALESCE($2, first_name),
                    last_name = COALESCE($3, last_name),
                    password = COALESCE($4, password),
                    is_admin = COALESCE($5, is_admin),
                    updated_at = CURRENT_TIMESTAMP
                WHERE id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(&event.first_name)
        .bind(&event.last_name)
        .bind(event.password.as_deref().map(digest_password))
        .bind(event.is_admin)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }
}

/// Opaque digest at rest. Nothing authenticates against it; it only keeps
/// the raw credential out of the table.
fn digest_password(raw: &str) -> String {
    hex::encode(Sha256::digest(raw.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_hex_encoded() {
        let d = digest_password("secret");
        assert_eq!(d, digest_password("secret"));
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
