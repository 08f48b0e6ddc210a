use crate::validation;
use chrono::NaiveDateTime;
use kernel::model::{
    id::StateId,
    state::{event::CreateState, State},
};
use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;

#[derive(Debug)]
pub struct CreateStateRequest {
    pub name: String,
}

impl CreateStateRequest {
    pub fn parse(body: &Value) -> AppResult<Self> {
        let body = validation::as_object(body)?;
        let name = validation::required_string(body, "name")?;
        Ok(Self { name })
    }
}

impl From<CreateStateRequest> for CreateState {
    fn from(value: CreateStateRequest) -> Self {
        CreateState { name: value.name }
    }
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub id: StateId,
    #[serde(with = "super::wire_date")]
    pub created_at: NaiveDateTime,
    #[serde(with = "super::wire_date")]
    pub updated_at: NaiveDateTime,
    pub name: String,
}

impl From<State> for StateResponse {
    fn from(value: State) -> Self {
        let State {
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
