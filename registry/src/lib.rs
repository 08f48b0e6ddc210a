use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    amenity::AmenityRepositoryImpl, booking::BookingRepositoryImpl, city::CityRepositoryImpl,
    health::HealthCheckRepositoryImpl, place::PlaceRepositoryImpl, review::ReviewRepositoryImpl,
    state::StateRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    amenity::AmenityRepository, booking::BookingRepository, city::CityRepository,
    health::HealthCheckRepository, place::PlaceRepository, review::ReviewRepository,
    state::StateRepository, user::UserRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    state_repository: Arc<dyn StateRepository>,
    city_repository: Arc<dyn CityRepository>,
    user_repository: Arc<dyn UserRepository>,
    place_repository: Arc<dyn PlaceRepository>,
    amenity_repository: Arc<dyn AmenityRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            state_repository: Arc::new(StateRepositoryImpl::new(pool.clone())),
            city_repository: Arc::new(CityRepositoryImpl::new(pool.clone())),
            user_repository: Arc::new(UserRepositoryImpl::new(pool.clone())),
            place_repository: Arc::new(PlaceRepositoryImpl::new(pool.clone())),
            amenity_repository: Arc::new(AmenityRepositoryImpl::new(pool.clone())),
            review_repository: Arc::new(ReviewRepositoryImpl::new(pool.clone())),
            booking_repository: Arc::new(BookingRepositoryImpl::new(pool)),
        }
    }

    /// Assembles a registry from hand-built repositories. Handler tests use
    /// this to swap in mocks; production code goes through [`Self::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        state_repository: Arc<dyn StateRepository>,
        city_repository: Arc<dyn CityRepository>,
        user_repository: Arc<dyn UserRepository>,
        place_repository: Arc<dyn PlaceRepository>,
        amenity_repository: Arc<dyn AmenityRepository>,
        review_repository: Arc<dyn ReviewRepository>,
        booking_repository: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            state_repository,
            city_repository,
            user_repository,
            place_repository,
            amenity_repository,
            review_repository,
            booking_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn state_repository(&self) -> Arc<dyn StateRepository> {
        self.state_repository.clone()
    }

    pub fn city_repository(&self) -> Arc<dyn CityRepository> {
        self.city_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn place_repository(&self) -> Arc<dyn PlaceRepository> {
        self.place_repository.clone()
    }

    pub fn amenity_repository(&self) -> Arc<dyn AmenityRepository> {
        self.amenity_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }
}
