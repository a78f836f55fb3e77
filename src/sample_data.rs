use crate::models::property::{Coordinates, ListingType, NormalizedProperty, PropertyType};

pub const DEFAULT_SUBURB: &str = "Belmont North";

pub const AVAILABLE_SUBURBS: [&str; 7] = [
    "Belmont North NSW",
    "Canterbury NSW",
    "Burwood NSW",
    "Ashfield NSW",
    "Strathfield NSW",
    "Campsie NSW",
    "Lakemba NSW",
];

/// Bundled listings served when live data is unavailable.
pub fn sample_properties() -> Vec<NormalizedProperty> {
    vec![
        NormalizedProperty {
            id: String::from("1"),
            address: String::from("42 Canterbury Road"),
            suburb: String::from("Canterbury"),
            state: String::from("NSW"),
            price: String::from("$1,250,000"),
            property_type: PropertyType::House,
            bedrooms: 4,
            bathrooms: 2,
            area: 320,
            image: String::from("/modern-house-exterior.png"),
            coordinates: Coordinates {
                lat: -33.9125,
                lng: 151.1175,
            },
            listing_type: ListingType::Buy,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("2"),
            address: String::from("15/88 Burwood Road"),
            suburb: String::from("Burwood"),
            state: String::from("NSW"),
            price: String::from("$650,000"),
            property_type: PropertyType::Apartment,
            bedrooms: 2,
            bathrooms: 1,
            area: 85,
            image: String::from("/modern-apartment.png"),
            coordinates: Coordinates {
                lat: -33.8765,
                lng: 151.1043,
            },
            listing_type: ListingType::Buy,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("3"),
            address: String::from("7 Lakeside Drive"),
            suburb: String::from("Canterbury"),
            state: String::from("NSW"),
            price: String::from("$950,000"),
            property_type: PropertyType::Townhouse,
            bedrooms: 3,
            bathrooms: 2,
            area: 180,
            image: String::from("/contemporary-townhouse.jpg"),
            coordinates: Coordinates {
                lat: -33.9145,
                lng: 151.1195,
            },
            listing_type: ListingType::Buy,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("4"),
            address: String::from("123 Park Avenue"),
            suburb: String::from("Ashfield"),
            state: String::from("NSW"),
            price: String::from("$2,100 per week"),
            property_type: PropertyType::House,
            bedrooms: 5,
            bathrooms: 3,
            area: 450,
            image: String::from("/luxury-family-home.jpg"),
            coordinates: Coordinates {
                lat: -33.8897,
                lng: 151.1254,
            },
            listing_type: ListingType::Rent,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("5"),
            address: String::from("56 Victoria Street"),
            suburb: String::from("Canterbury"),
            state: String::from("NSW"),
            price: String::from("$1,450,000"),
            property_type: PropertyType::House,
            bedrooms: 4,
            bathrooms: 3,
            area: 380,
            image: String::from("/renovated-brick-house.jpg"),
            coordinates: Coordinates {
                lat: -33.9105,
                lng: 151.1165,
            },
            listing_type: ListingType::Buy,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("6"),
            address: String::from("22/150 Canterbury Road"),
            suburb: String::from("Canterbury"),
            state: String::from("NSW"),
            price: String::from("$580,000"),
            property_type: PropertyType::Unit,
            bedrooms: 2,
            bathrooms: 1,
            area: 75,
            image: String::from("/modern-unit-with-balcony.jpg"),
            coordinates: Coordinates {
                lat: -33.9135,
                lng: 151.1185,
            },
            listing_type: ListingType::Buy,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("7"),
            address: String::from("89 High Street"),
            suburb: String::from("Ashfield"),
            state: String::from("NSW"),
            price: String::from("$1,800,000"),
            property_type: PropertyType::House,
            bedrooms: 5,
            bathrooms: 3,
            area: 520,
            image: String::from("/heritage-home-with-garden.jpg"),
            coordinates: Coordinates {
                lat: -33.8887,
                lng: 151.1264,
            },
            listing_type: ListingType::Sold,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
        NormalizedProperty {
            id: String::from("8"),
            address: String::from("34 River Road"),
            suburb: String::from("Burwood"),
            state: String::from("NSW"),
            price: String::from("$750,000"),
            property_type: PropertyType::Apartment,
            bedrooms: 3,
            bathrooms: 2,
            area: 110,
            image: String::from("/spacious-apartment-with-city-views.jpg"),
            coordinates: Coordinates {
                lat: -33.8775,
                lng: 151.1053,
            },
            listing_type: ListingType::Buy,
            description: None,
            garage_spaces: None,
            land_size: None,
            listing_date: None,
        },
    ]
}

/// Samples for an empty live result: everything for the default suburb,
/// otherwise the samples whose suburb contains the query (case-insensitive).
pub fn samples_for_suburb(suburb: &str) -> Vec<NormalizedProperty> {
    let query = suburb.trim().to_lowercase();
    if query == DEFAULT_SUBURB.to_lowercase() {
        return sample_properties();
    }

    sample_properties()
        .into_iter()
        .filter(|property| property.suburb.to_lowercase().contains(&query))
        .collect()
}

/// Known suburbs containing `query`, used for search suggestions.
pub fn suggest_suburbs(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    AVAILABLE_SUBURBS
        .iter()
        .copied()
        .filter(|suburb| suburb.to_lowercase().contains(&query))
        .collect()
}
