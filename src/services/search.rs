use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::{error, info, warn};
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::config::Config;
use crate::models::criteria::ALL_PROPERTY_TYPES;
use crate::models::external::{ExternalRecord, RelayPayload};
use crate::models::property::NormalizedProperty;
use crate::sample_data::{sample_properties, samples_for_suburb, DEFAULT_SUBURB};

use super::normalize::normalize_all;

pub const RELAY_PATH: &str = "/api/properties";

lazy_static! {
    static ref STATE_SUFFIX_REGEX: Regex =
        Regex::new(r"(?i)\s+(NSW|VIC|QLD|SA|WA|TAS|NT|ACT)$").unwrap();
}

/// Search client: asks the relay for a suburb's listings and turns the answer
/// into normalized records, substituting sample data when there is nothing
/// live to show.
#[derive(Debug, Clone)]
pub struct PropertyService {
    http: reqwest::Client,
    relay_base_url: String,
}

impl PropertyService {
    pub fn new(relay_base_url: &str) -> PropertyService {
        PropertyService {
            http: reqwest::Client::new(),
            relay_base_url: relay_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> PropertyService {
        PropertyService::new(&config.relay_base_url())
    }

    /*
       One relay request per call. Failures never reach the caller:
       - relay unreachable or failing -> every sample
       - empty live result -> samples matching the suburb
    */
    pub async fn search(&self, location: &str, property_type: &str) -> Vec<NormalizedProperty> {
        let suburb = suburb_name(location);
        let property_type = match property_type.trim() {
            "" => ALL_PROPERTY_TYPES,
            other => other,
        };

        info!(
            "Searching properties in '{}' (property_type: {})",
            suburb, property_type
        );

        match self.fetch_records(&suburb, property_type).await {
            Ok(records) if records.is_empty() => {
                warn!("No live listings for '{}', using sample data", suburb);
                samples_for_suburb(&suburb)
            }
            Ok(records) => normalize_all(&records),
            Err(e) => {
                error!("Error fetching properties: {:?}", e);
                sample_properties()
            }
        }
    }

    async fn fetch_records(&self, suburb: &str, property_type: &str) -> Result<Vec<ExternalRecord>> {
        let url = format!("{}{}", self.relay_base_url, RELAY_PATH);
        let params: Vec<(&str, &str)> = vec![("suburb", suburb), ("property_type", property_type)];

        let response = self
            .http
            .get(url)
            .query(&params)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .context("Failed to reach property relay")?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error! status: {}", response.status()));
        }

        let payload: RelayPayload = response
            .json()
            .await
            .context("Failed to deserialize relay response")?;

        Ok(decode_records(payload.results))
    }
}

/// Typed view of the relay's `results`. Entries that are not listing objects
/// are dropped and logged instead of travelling further.
pub fn decode_records(results: Vec<Value>) -> Vec<ExternalRecord> {
    results
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record = ExternalRecord::from_value(value);
            if record.is_none() {
                warn!("Skipping malformed listing at position {}", index);
            }
            record
        })
        .collect()
}

/// "Canterbury NSW" -> "Canterbury". Blank input means the default suburb.
pub fn suburb_name(location: &str) -> String {
    let suburb = STATE_SUFFIX_REGEX.replace(location.trim(), "");
    match suburb.trim() {
        "" => DEFAULT_SUBURB.to_string(),
        name => name.to_string(),
    }
}
