use crate::model::id::AmenityId;
use chrono::NaiveDateTime;

pub mod event;

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
