use crate::model::{
    amenity::{event::CreateAmenity, Amenity},
    id::{AmenityId, PlaceId},
    list::PageOptions,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, event: CreateAmenity) -> AppResult<AmenityId>;
    async fn exists(&self, amenity_id: AmenityId) -> AppResult<bool>;
    async fn find_by_id(&self, amenity_id: AmenityId) -> AppResult<Option<Amenity>>;
    async fn find_all(&self, options: PageOptions) -> AppResult<Vec<Amenity>>;
    async fn delete(&self, amenity_id: AmenityId) -> AppResult<()>;

    async fn find_by_place_id(
        &self,
        place_id: PlaceId,
        options: PageOptions,
    ) -> AppResult<Vec<Amenity>>;
    async fn attach_to_place(&self, place_id: PlaceId, amenity_id: AmenityId) -> AppResult<()>;
    async fn detach_from_place(&self, place_id: PlaceId, amenity_id: AmenityId) -> AppResult<()>;
}
