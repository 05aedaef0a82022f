//! Broker directory payloads.
//!
//! The remote API uses Spanish field names; they are mapped to English
//! ones here. Text fields tolerate numbers and nulls since the API is not
//! strict about them.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Broker identifier. The API sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum BrokerId {
    Number(u64),
    Text(String),
}

impl fmt::Display for BrokerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrokerId::Number(n) => write!(f, "{}", n),
            BrokerId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for BrokerId {
    fn from(value: &str) -> Self {
        match value.parse::<u64>() {
            Ok(n) => BrokerId::Number(n),
            Err(_) => BrokerId::Text(value.to_string()),
        }
    }
}

/// Entry of `GET /brokers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Broker {
    pub id: BrokerId,
    #[serde(rename = "nombre", deserialize_with = "text")]
    pub name: String,
    #[serde(rename = "pais", default, deserialize_with = "text")]
    pub country: String,
}

/// Body of `GET /brokers/details?id=<id>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrokerDetails {
    pub id: BrokerId,
    #[serde(rename = "nombre", deserialize_with = "text")]
    pub name: String,
    #[serde(rename = "pais", default, deserialize_with = "text")]
    pub country: String,
    #[serde(rename = "direccion", default, deserialize_with = "text")]
    pub address: String,
    #[serde(rename = "telefono", default, deserialize_with = "text")]
    pub phone: String,
    #[serde(default, deserialize_with = "text")]
    pub email: String,
    #[serde(rename = "licencia", default, deserialize_with = "text")]
    pub license: String,
    #[serde(rename = "activo_desde", default, deserialize_with = "text")]
    pub active_since: String,
    #[serde(rename = "sitio_web", default, deserialize_with = "text")]
    pub website: String,
}

impl BrokerDetails {
    /// `mailto:` link for the broker's email, if it has one.
    pub fn mailto(&self) -> Option<String> {
        (!self.email.is_empty()).then(|| format!("mailto:{}", self.email))
    }
}

/// The details endpoint answers with either one object or a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetailsPayload {
    One(BrokerDetails),
    Many(Vec<BrokerDetails>),
}

impl DetailsPayload {
    /// The broker described by the payload; the first one for lists.
    pub fn into_details(self) -> Option<BrokerDetails> {
        match self {
            DetailsPayload::One(details) => Some(details),
            DetailsPayload::Many(list) => list.into_iter().next(),
        }
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
