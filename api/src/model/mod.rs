use serde::Serialize;

pub mod amenity;
pub mod booking;
pub mod city;
pub mod pagination;
pub mod place;
pub mod review;
pub mod state;
pub mod user;

/// Serde adapter for the fixed `YYYY/MM/DD HH:MM:SS` wire format used by
/// every timestamp this API emits or accepts.
pub mod wire_date {
    use crate::validation::WIRE_DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(WIRE_DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, WIRE_DATETIME_FORMAT).map_err(de::Error::custom)
    }
}

/// Body for successful creations: `{code, id, msg}`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<Id: Serialize> {
    pub code: u32,
    pub id: Id,
    pub msg: &'static str,
}

impl<Id: Serialize> CreatedResponse<Id> {
    pub fn new(id: Id, msg: &'static str) -> Self {
        Self { code: 201, id, msg }
    }
}

/// Body for successful updates and deletions: `{code, msg}`.
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    pub code: u32,
    pub msg: &'static str,
}

impl OperationResponse {
    pub fn new(code: u32, msg: &'static str) -> Self {
        Self { code, msg }
    }

    pub fn ok(msg: &'static str) -> Self {
        Self::new(200, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "wire_date")]
        at: NaiveDateTime,
    }

    #[test]
    fn wire_date_round_trips_the_fixed_format() {
        let json = r#"{"at":"2024/03/10 14:30:00"}"#;
        let stamp: Stamp = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&stamp).unwrap(), json);
    }

    #[test]
    fn wire_date_rejects_other_formats() {
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"2024-03-10T14:30:00"}"#).is_err());
    }
}
