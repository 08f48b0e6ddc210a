use crate::model::id::{CityId, StateId};
use chrono::NaiveDateTime;

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
