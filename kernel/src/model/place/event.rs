use crate::model::id::{CityId, PlaceId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreatePlace {
    pub owner_id: UserId,
    pub city_id: CityId,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: i32,
    pub number_bathrooms: i32,
    pub max_guest: i32,
    pub price_by_night: i32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Owner and city are fixed at creation, like a booking's user.
#[derive(Debug, new)]
pub struct UpdatePlace {
    pub place_id: PlaceId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<i32>,
    pub number_bathrooms: Option<i32>,
    pub max_guest: Option<i32>,
    pub price_by_night: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
