use crate::model::{
    city::{event::CreateCity, City},
    id::{CityId, StateId},
    list::PageOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn create(&self, event: CreateCity) -> AppResult<CityId>;
    async fn exists(&self, city_id: CityId) -> AppResult<bool>;
    async fn find_by_id(&self, city_id: CityId) -> AppResult<Option<City>>;
    async fn find_by_state_id(
        &self,
        state_id: StateId,
        options: PageOptions,
    ) -> AppResult<Vec<City>>;
    async fn delete(&self, city_id: CityId) -> AppResult<()>;
}
