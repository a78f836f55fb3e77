use lazy_static::lazy_static;
use regex::Regex;

use crate::models::criteria::SearchCriteria;
use crate::models::property::NormalizedProperty;

lazy_static! {
    static ref DISPLAY_PRICE_REGEX: Regex =
        Regex::new(r"^\s*(?:[A-Z]{0,3}\$|[€£¥])?\s*([0-9][0-9,]*)").unwrap();
}

/// Narrows a result set to the records matching every criterion. Input order
/// is preserved.
pub fn filter(properties: &[NormalizedProperty], criteria: &SearchCriteria) -> Vec<NormalizedProperty> {
    properties
        .iter()
        .filter(|property| matches(property, criteria))
        .cloned()
        .collect()
}

pub fn matches(property: &NormalizedProperty, criteria: &SearchCriteria) -> bool {
    if property.listing_type != criteria.listing_type {
        return false;
    }

    if !criteria.property_type.matches(property.property_type) {
        return false;
    }

    let (min_price, max_price) = criteria.price_range;
    let price = parse_price(&property.price);
    if price < min_price || price > max_price {
        return false;
    }

    if criteria.min_bedrooms > 0 && property.bedrooms < criteria.min_bedrooms {
        return false;
    }

    if criteria.min_bathrooms > 0 && property.bathrooms < criteria.min_bathrooms {
        return false;
    }

    true
}

/*
   Numeric value of a display price: "$1,250,000" -> 1250000,
   "$2,100 per week" -> 2100. Anything without a leading amount counts as 0.
*/
pub fn parse_price(display: &str) -> u64 {
    DISPLAY_PRICE_REGEX
        .captures(display)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .unwrap_or(0)
}
