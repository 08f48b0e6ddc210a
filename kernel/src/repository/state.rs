use crate::model::{
    id::StateId,
    list::PageOptions,
    state::{event::CreateState, State},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn create(&self, event: CreateState) -> AppResult<StateId>;
    async fn exists(&self, state_id: StateId) -> AppResult<bool>;
    async fn find_by_id(&self, state_id: StateId) -> AppResult<Option<State>>;
    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<State>>;
    async fn delete(&self, state_id: StateId) -> AppResult<()>;
}
