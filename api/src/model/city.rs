use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    city::{event::CreateCity, City},
    id::{CityId, StateId},
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

#[derive(Debug)]
pub struct CreateCityRequest {
    pub name: String,
}

impl CreateCityRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        let name = validation::required_string(body, "name")?;
        Ok(Self { name })
    }

    pub fn into_event(self, state_id: StateId) -> CreateCity {
        CreateCity::new(self.name, state_id)
    }
}

#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub id: CityId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
    pub name: String,
    pub state_id: StateId,
}

impl From<City> for CityResponse {
    fn from(value: City) -> Self {
        let City {
            id,
            name,
            state_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            created_at,
            updated_at,
            name,
            state_id,
        }
    }
}
