use crate::model::id::StateId;
use chrono::NaiveDateTime;

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
