use lazy_static::lazy_static;
use regex::Regex;

use crate::models::external::{
    ExternalAddress, ExternalAttributes, ExternalCoordinates, ExternalRecord,
};
use crate::models::property::{Coordinates, ListingType, NormalizedProperty, PropertyType};

use super::filter::parse_price;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const PRICE_ON_REQUEST: &str = "Contact agent";

// Anything above this is a provider glitch, not an asking price
const MAX_LISTING_PRICE: f64 = 1e15;

lazy_static! {
    static ref LEADING_NUMBER_REGEX: Regex = Regex::new(r"[0-9][0-9,]*").unwrap();
}

/*
   Maps one upstream record onto the canonical shape. Never fails: every
   missing or malformed field falls back to its default.
*/
pub fn normalize(record: &ExternalRecord) -> NormalizedProperty {
    let attributes = &record.attributes;

    NormalizedProperty {
        id: record.gnaf_pid.clone().unwrap_or_default(),
        address: record.address.street.clone().unwrap_or_default(),
        suburb: record.address.sal.clone().unwrap_or_default(),
        state: record.address.state.clone().unwrap_or_default(),
        price: record
            .price
            .map(f64::round)
            .filter(|price| (0.0..=MAX_LISTING_PRICE).contains(price))
            .map(|price| format_price(price as u64))
            .unwrap_or_else(|| String::from(PRICE_ON_REQUEST)),
        property_type: record
            .property_type
            .as_deref()
            .and_then(PropertyType::from_category)
            .unwrap_or(PropertyType::House),
        bedrooms: attributes.bedrooms.unwrap_or(0),
        bathrooms: attributes.bathrooms.unwrap_or(0),
        area: attributes.land_size.as_deref().map(parse_area).unwrap_or(0),
        image: String::from(PLACEHOLDER_IMAGE),
        coordinates: Coordinates {
            lat: record.coordinates.latitude.unwrap_or(0.0),
            lng: record.coordinates.longitude.unwrap_or(0.0),
        },
        // The provider only lists properties for sale
        listing_type: ListingType::Buy,
        description: attributes.description.clone(),
        garage_spaces: attributes.garage_spaces,
        land_size: attributes.land_size.clone(),
        listing_date: record.listing_date.clone(),
    }
}

/// Normalizes a whole result set in source order. Records without an id get
/// `listing-{position}` so ids stay unique within the set.
pub fn normalize_all(records: &[ExternalRecord]) -> Vec<NormalizedProperty> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut property = normalize(record);
            if property.id.is_empty() {
                property.id = format!("listing-{}", index + 1);
            }
            property
        })
        .collect()
}

/// `1250000` -> `$1,250,000`.
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${}", grouped)
}

/// Square meters from free-text land size: "650m²" -> 650, "1,200 m2" -> 1200,
/// "no data" -> 0.
pub fn parse_area(land_size: &str) -> u32 {
    LEADING_NUMBER_REGEX
        .find(land_size)
        .and_then(|m| m.as_str().replace(',', "").parse::<u32>().ok())
        .unwrap_or(0)
}

impl From<&NormalizedProperty> for ExternalRecord {
    fn from(property: &NormalizedProperty) -> Self {
        let price = match property.price.as_str() {
            PRICE_ON_REQUEST => None,
            display => Some(parse_price(display) as f64),
        };

        ExternalRecord {
            address: ExternalAddress {
                street: Some(property.address.clone()),
                sal: Some(property.suburb.clone()),
                state: Some(property.state.clone()),
                sa1: None,
            },
            attributes: ExternalAttributes {
                bedrooms: Some(property.bedrooms),
                bathrooms: Some(property.bathrooms),
                garage_spaces: property.garage_spaces,
                land_size: property
                    .land_size
                    .clone()
                    .or_else(|| (property.area > 0).then(|| format!("{}m²", property.area))),
                building_size: None,
                description: property.description.clone(),
            },
            coordinates: ExternalCoordinates {
                latitude: Some(property.coordinates.lat),
                longitude: Some(property.coordinates.lng),
            },
            gnaf_pid: Some(property.id.clone()),
            price,
            listing_date: property.listing_date.clone(),
            property_type: Some(property.property_type.as_str().to_string()),
            area_level: None,
            area_name: None,
        }
    }
}
