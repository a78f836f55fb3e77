use std::fmt;
use std::str::FromStr;

use anyhow::Error;

use super::property::{ListingType, PropertyType};

pub const ALL_PROPERTY_TYPES: &str = "all";
pub const DEFAULT_MAX_PRICE: u64 = 3_000_000;

/// Property type constraint; `all` is the "no filter" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyTypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl PropertyTypeFilter {
    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            PropertyTypeFilter::All => true,
            PropertyTypeFilter::Only(wanted) => *wanted == property_type,
        }
    }
}

impl fmt::Display for PropertyTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyTypeFilter::All => f.write_str(ALL_PROPERTY_TYPES),
            PropertyTypeFilter::Only(t) => f.write_str(t.as_str()),
        }
    }
}

impl FromStr for PropertyTypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_PROPERTY_TYPES) {
            return Ok(PropertyTypeFilter::All);
        }
        s.parse().map(PropertyTypeFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub listing_type: ListingType,
    pub property_type: PropertyTypeFilter,
    /// Inclusive `[min, max]`.
    pub price_range: (u64, u64),
    /// 0 means no constraint.
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            listing_type: ListingType::Buy,
            property_type: PropertyTypeFilter::All,
            price_range: (0, DEFAULT_MAX_PRICE),
            min_bedrooms: 0,
            min_bathrooms: 0,
        }
    }
}
