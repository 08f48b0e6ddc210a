use crate::model::{
    id::PlaceId,
    list::PageOptions,
    place::{
        event::{CreatePlace, UpdatePlace},
        Place,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    async fn create(&self, event: CreatePlace) -> AppResult<PlaceId>;
    async fn exists(&self, place_id: PlaceId) -> AppResult<bool>;
    async fn find_by_id(&self, place_id: PlaceId) -> AppResult<Option<Place>>;
    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<Place>>;
    async fn update(&self, event: UpdatePlace) -> AppResult<()>;
    async fn delete(&self, place_id: PlaceId) -> AppResult<()>;
}
