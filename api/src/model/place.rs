use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    id::{CityId, PlaceId, UserId},
    place::{
        event::{CreatePlace, UpdatePlace},
        Place,
    },
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

#[derive(Debug)]
pub struct CreatePlaceRequest {
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

impl CreatePlaceRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::require(body, "owner_id")?;
        validation::require(body, "name")?;
        validation::require(body, "city_id")?;

        let owner_id = validation::required_integer(body, "owner_id")?;
        let name = validation::required_string(body, "name")?;
        let city_id = validation::required_integer(body, "city_id")?;
        let description = validation::optional_string(body, "description")?;
        let number_rooms = validation::optional_integer(body, "number_rooms")?.unwrap_or(0);
        let number_bathrooms = validation::optional_integer(body, "number_bathrooms")?.unwrap_or(0);
        let max_guest = validation::optional_integer(body, "max_guest")?.unwrap_or(0);
        let price_by_night = validation::optional_integer(body, "price_by_night")?.unwrap_or(0);
        let latitude = validation::optional_float(body, "latitude")?;
        let longitude = validation::optional_float(body, "longitude")?;

        Ok(Self {
            owner_id: UserId::new(owner_id),
            city_id: CityId::new(city_id),
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
        })
    }
}

impl From<CreatePlaceRequest> for CreatePlace {
    fn from(value: CreatePlaceRequest) -> Self {
        let CreatePlaceRequest {
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
        } = value;
        CreatePlace {
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
        }
    }
}

#[derive(Debug)]
pub struct UpdatePlaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<i32>,
    pub number_bathrooms: Option<i32>,
    pub max_guest: Option<i32>,
    pub price_by_night: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdatePlaceRequest {
    /// Owner and city are as immutable as a booking's user.
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        validation::reject_field(body, "owner_id", "Owner cannot be changed")?;
        validation::reject_field(body, "city_id", "City cannot be changed")?;

        let name = validation::optional_string(body, "name")?;
        let description = validation::optional_string(body, "description")?;
        let number_rooms = validation::optional_integer(body, "number_rooms")?;
        let number_bathrooms = validation::optional_integer(body, "number_bathrooms")?;
        let max_guest = validation::optional_integer(body, "max_guest")?;
        let price_by_night = validation::optional_integer(body, "price_by_night")?;
        let latitude = validation::optional_float(body, "latitude")?;
        let longitude = validation::optional_float(body, "longitude")?;

        Ok(Self {
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
        })
    }

    pub fn into_event(self, place_id: PlaceId) -> UpdatePlace {
        let UpdatePlaceRequest {
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
        } = self;
        UpdatePlace::new(
            place_id,
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct PlaceResponse {
    pub id: PlaceId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
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

impl From<Place> for PlaceResponse {
    fn from(value: Place) -> Self {
        let Place {
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
        Self {
            id,
            created_at,
            updated_at,
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::AppError;

    #[test]
    fn create_defaults_counts_to_zero() {
        let req = CreatePlaceRequest::parse(&json!({
            "owner_id": 1,
            "name": "Sea Cabin",
            "city_id": 4,
        }))
        .unwrap();
        assert_eq!(req.number_rooms, 0);
        assert_eq!(req.price_by_night, 0);
        assert!(req.latitude.is_none());
    }

    #[test]
    fn create_rejects_numeric_name() {
        let err = CreatePlaceRequest::parse(&json!({
            "owner_id": 1,
            "name": "42",
            "city_id": 4,
        }))
        .unwrap_err();
        match err {
            AppError::InvalidField(msg) => assert_eq!(msg, "name is not a string"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn update_cannot_move_the_place() {
        let err = UpdatePlaceRequest::parse(&json!({"city_id": 9})).unwrap_err();
        assert!(matches!(err, AppError::ImmutableField(_)));
    }
}
