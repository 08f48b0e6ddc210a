use chrono::NaiveDateTime;
use kernel::model::{
    city::City,
    id::{CityId, StateId},
};

#[derive(sqlx::FromRow)]
pub struct CityRow {
    pub id: CityId,
    pub name: String,
    pub state_id: StateId,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CityRow> for City {
    fn from(value: CityRow) -> Self {
        let CityRow {
            id,
            name,
            state_id,
            created_at,
            updated_at,
        } = value;
        City {
            id,
            name,
            state_id,
            created_at,
            updated_at,
        }
    }
}
