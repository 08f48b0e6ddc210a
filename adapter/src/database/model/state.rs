use chrono::NaiveDateTime;
use kernel::model::{id::StateId, state::State};

#[derive(sqlx::FromRow)]
pub struct StateRow {
    pub id: StateId,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<StateRow> for State {
    fn from(value: StateRow) -> Self {
        let StateRow {
            id,
            name,
            created_at,
            updated_at,
        } = value;
        State {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}
