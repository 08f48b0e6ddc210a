use chrono::NaiveDateTime;
use kernel::model::{
    id::{CityId, PlaceId, UserId},
    place::Place,
};

#[derive(sqlx::FromRow)]
pub struct PlaceRow {
    pub id: PlaceId,
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<PlaceRow> for Place {
    fn from(value: PlaceRow) -> Self {
        let PlaceRow {
            id,
            owner_id,
            city_id,
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
            created_at,
            updated_at,
        } = value;
        Place {
            id,
            owner_id,
            city_id,
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
            created_at,
            updated_at,
        }
    }
}
