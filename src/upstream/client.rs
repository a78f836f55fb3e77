use log::info;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::config::Config;
use crate::errors::RelayError;
use crate::models::criteria::ALL_PROPERTY_TYPES;

use super::repair::repair_nan_tokens;

/// Client for the third-party listing provider. Used only by the relay.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    api_url: String,
    api_token: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> UpstreamClient {
        UpstreamClient {
            http: reqwest::Client::new(),
            api_url: config.upstream_api_url.clone(),
            api_token: config.upstream_api_token.clone(),
        }
    }

    /*
       Fetches the listings of one suburb and returns the provider's payload
       as JSON, after NaN repair. One request, no retry.
    */
    pub async fn fetch_properties(
        &self,
        suburb: &str,
        property_type: &str,
    ) -> Result<Value, RelayError> {
        let mut params: Vec<(&str, String)> = vec![("suburb", suburb.to_string())];
        if let Some(property_type) = upstream_property_type(property_type) {
            params.push(("property_type", property_type));
        }

        let mut headers: HeaderMap = HeaderMap::new();
        if let Ok(auth) = HeaderValue::from_str(&format!("Bearer {}", self.api_token)) {
            headers.insert(AUTHORIZATION, auth);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        info!("Requesting upstream listings for suburb '{}'", suburb);

        let response = self
            .http
            .get(&self.api_url)
            .query(&params)
            .headers(headers)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RelayError::Status(response.status()));
        }

        let text = response.text().await?;
        let data: Value = serde_json::from_str(&repair_nan_tokens(&text))?;

        Ok(data)
    }
}

/// Provider-side `property_type` parameter: omitted for `all`, lower-cased
/// otherwise.
pub fn upstream_property_type(property_type: &str) -> Option<String> {
    let property_type = property_type.trim();
    if property_type.is_empty() || property_type == ALL_PROPERTY_TYPES {
        None
    } else {
        Some(property_type.to_lowercase())
    }
}
