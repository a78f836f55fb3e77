use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Upstream listing
//  ├── address
//  │    ├── street
//  │    ├── sal          (suburb)
//  │    ├── state
//  │    └── sa1
//  ├── attributes
//  │    ├── bedrooms / bathrooms / garage_spaces
//  │    ├── land_size / building_size
//  │    └── description
//  ├── coordinates
//  │    ├── latitude
//  │    └── longitude
//  └── gnaf_pid, price, listing_date, property_type, area_level, area_name
//
// Every field is optional and decoded leniently: the provider emits floats for
// counts, nulls for anything it does not know, and the occasional string.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalRecord {
    #[serde(deserialize_with = "lenient_object")]
    pub address: ExternalAddress,
    #[serde(deserialize_with = "lenient_object")]
    pub attributes: ExternalAttributes,
    #[serde(deserialize_with = "lenient_object")]
    pub coordinates: ExternalCoordinates,
    #[serde(deserialize_with = "lenient_string")]
    pub gnaf_pid: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "lenient_string")]
    pub listing_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub property_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub area_level: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub area_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAddress {
    #[serde(deserialize_with = "lenient_string")]
    pub street: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sal: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sa1: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalAttributes {
    #[serde(deserialize_with = "lenient_count")]
    pub bedrooms: Option<u32>,
    #[serde(deserialize_with = "lenient_count")]
    pub bathrooms: Option<u32>,
    #[serde(deserialize_with = "lenient_count")]
    pub garage_spaces: Option<u32>,
    #[serde(deserialize_with = "lenient_string")]
    pub land_size: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub building_size: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalCoordinates {
    #[serde(deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

/// Body returned by the relay: the upstream payload, or the relay's own
/// failure payload (`error` set, `results` empty).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelayPayload {
    #[serde(deserialize_with = "lenient_results")]
    pub results: Vec<Value>,
    pub error: Option<String>,
}

// A nested block that is null or not an object counts as empty
fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

// `"results": null` (or any non-array) means no results
fn lenient_results<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(results) => results,
        _ => Vec::new(),
    })
}

// Custom deserialization for string fields as the provider sometimes sends numbers
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(num) => Some(num.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(num) => num.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

// Counts arrive as 3, 3.0 or "3"; negatives and fractions are not counts
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = lenient_f64(deserializer)?;
    Ok(value
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

impl ExternalRecord {
    /// Decodes one entry of an upstream `results` array. Only non-object
    /// entries are rejected; every field problem inside an object is absorbed
    /// by the lenient field decoders.
    pub fn from_value(value: Value) -> Option<ExternalRecord> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}
