use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Townhouse,
    Land,
    Unit,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Townhouse,
        PropertyType::Land,
        PropertyType::Unit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Land => "Land",
            PropertyType::Unit => "Unit",
        }
    }

    /// Whitelist lookup of a provider category. Unknown categories are `None`,
    /// the caller decides the fallback.
    pub fn from_category(category: &str) -> Option<PropertyType> {
        let category = category.trim();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(category))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::from_category(s).ok_or_else(|| anyhow!("Unknown property type '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListingType {
    #[default]
    Buy,
    Rent,
    Sold,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Buy => "Buy",
            ListingType::Rent => "Rent",
            ListingType::Sold => "Sold",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ListingType::Buy, ListingType::Rent, ListingType::Sold]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unknown listing type '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Canonical listing consumed by filtering and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProperty {
    pub id: String,
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub price: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub image: String,
    pub coordinates: Coordinates,
    pub listing_type: ListingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garage_spaces: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listing_date: Option<String>,
}
