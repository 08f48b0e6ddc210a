use chrono::NaiveDateTime;
use kernel::model::{amenity::Amenity, id::AmenityId};

#[derive(sqlx::FromRow)]
pub struct AmenityRow {
    pub id: AmenityId,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AmenityRow> for Amenity {
    fn from(value: AmenityRow) -> Self {
        let AmenityRow {
            id,
            name,
            created_at,
            updated_at,
        } = value;
        Amenity {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}
