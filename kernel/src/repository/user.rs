use crate::model::{
    id::UserId,
    list::PageOptions,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with the duplicate-email conflict when the address is taken.
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    async fn exists(&self, user_id: UserId) -> AppResult<bool>;
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<User>>;
    async fn update(&self, event: UpdateUser) -> AppResult<()>;
    async fn delete(&self, user_id: UserId) -> AppResult<()>;
}
