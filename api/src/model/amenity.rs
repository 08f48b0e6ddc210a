use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    amenity::{event::CreateAmenity, Amenity},
    id::AmenityId,
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

#[derive(Debug)]
pub struct CreateAmenityRequest {
    pub name: String,
}

impl CreateAmenityRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        let name = validation::required_string(body, "name")?;
        Ok(Self { name })
    }
}

impl From<CreateAmenityRequest> for CreateAmenity {
    fn from(value: CreateAmenityRequest) -> Self {
        CreateAmenity { name: value.name }
    }
}

#[derive(Debug, Serialize)]
pub struct AmenityResponse {
    pub id: AmenityId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
    pub name: String,
}

impl From<Amenity> for AmenityResponse {
    fn from(value: Amenity) -> Self {
        let Amenity {
            id,
            name,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            created_at,
            updated_at,
            name,
        }
    }
}
