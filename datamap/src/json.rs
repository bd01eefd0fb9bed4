use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn parse_json_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

#[derive(Debug)]
pub enum JsonColumnError {
    Sql(rusqlite::Error),
    Json(serde_json::Error),
}

impl From<rusqlite::Error> for JsonColumnError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<serde_json::Error> for JsonColumnError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

/// Reads text columns holding JSON documents.
pub trait JsonDeserializer {
    fn get_json<T>(&self, index: &str) -> Result<T, JsonColumnError>
    where
        T: DeserializeOwned;
}

impl<'stmt> JsonDeserializer for rusqlite::Row<'stmt> {
    fn get_json<T>(&self, index: &str) -> Result<T, JsonColumnError>
    where
        T: DeserializeOwned,
    {
        let value: String = self.get(index)?;
        let value = serde_json::from_str(&value)?;
        Ok(value)
    }
}
