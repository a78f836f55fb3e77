#[cfg(test)]
mod filter_tests {
    use propsearch::{
        filter,
        sample_data::sample_properties,
        services::filter::{matches, parse_price},
        ListingType, NormalizedProperty, PropertyType, PropertyTypeFilter, SearchCriteria,
    };

    fn ids(properties: &[NormalizedProperty]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    fn with_price(price: &str) -> NormalizedProperty {
        let mut property = sample_properties().remove(0);
        property.price = price.to_string();
        property
    }

    #[test]
    fn empty_list_stays_empty() {
        let criteria = SearchCriteria {
            listing_type: ListingType::Sold,
            property_type: PropertyTypeFilter::Only(PropertyType::Land),
            price_range: (10, 20),
            min_bedrooms: 9,
            min_bathrooms: 9,
        };
        assert!(filter(&[], &criteria).is_empty());
        assert!(filter(&[], &SearchCriteria::default()).is_empty());
    }

    #[test]
    fn default_criteria_keep_exactly_the_buy_listings() {
        let samples = sample_properties();
        let kept = filter(&samples, &SearchCriteria::default());

        let expected: Vec<&str> = samples
            .iter()
            .filter(|p| p.listing_type == ListingType::Buy)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids(&kept), expected);
        assert_eq!(ids(&kept), vec!["1", "2", "3", "5", "6", "8"]);
    }

    #[test]
    fn listing_type_must_match() {
        let samples = sample_properties();

        let rent = filter(
            &samples,
            &SearchCriteria {
                listing_type: ListingType::Rent,
                ..SearchCriteria::default()
            },
        );
        let sold = filter(
            &samples,
            &SearchCriteria {
                listing_type: ListingType::Sold,
                ..SearchCriteria::default()
            },
        );

        assert_eq!(ids(&rent), vec!["4"]);
        assert_eq!(ids(&sold), vec!["7"]);
    }

    #[test]
    fn property_type_filter() {
        let samples = sample_properties();
        let only = |property_type| SearchCriteria {
            property_type: PropertyTypeFilter::Only(property_type),
            ..SearchCriteria::default()
        };

        assert_eq!(ids(&filter(&samples, &only(PropertyType::House))), vec!["1", "5"]);
        assert_eq!(ids(&filter(&samples, &only(PropertyType::Apartment))), vec!["2", "8"]);
        assert_eq!(ids(&filter(&samples, &only(PropertyType::Unit))), vec!["6"]);
        assert!(filter(&samples, &only(PropertyType::Land)).is_empty());
    }

    #[test]
    fn price_range_is_inclusive() {
        let samples = sample_properties();
        let criteria = SearchCriteria {
            price_range: (650_000, 950_000),
            ..SearchCriteria::default()
        };

        assert_eq!(ids(&filter(&samples, &criteria)), vec!["2", "3", "8"]);
    }

    #[test]
    fn bedroom_and_bathroom_minimums() {
        let samples = sample_properties();

        let three_beds = SearchCriteria {
            min_bedrooms: 3,
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter(&samples, &three_beds)), vec!["1", "3", "5", "8"]);

        let three_baths = SearchCriteria {
            min_bathrooms: 3,
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter(&samples, &three_baths)), vec!["5"]);

        let both = SearchCriteria {
            min_bedrooms: 4,
            min_bathrooms: 2,
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter(&samples, &both)), vec!["1", "5"]);
    }

    #[test]
    fn zero_minimum_accepts_zero_rooms() {
        let mut land = with_price("$400,000");
        land.bedrooms = 0;
        land.bathrooms = 0;

        assert!(matches(&land, &SearchCriteria::default()));
        assert!(!matches(
            &land,
            &SearchCriteria {
                min_bedrooms: 1,
                ..SearchCriteria::default()
            }
        ));
    }

    #[test]
    fn does_not_mutate_or_reorder_input() {
        let samples = sample_properties();
        let before = samples.clone();

        let kept = filter(
            &samples,
            &SearchCriteria {
                price_range: (0, 1_000_000),
                ..SearchCriteria::default()
            },
        );

        assert_eq!(samples, before);
        assert_eq!(ids(&kept), vec!["2", "3", "6", "8"]);
    }

    #[test]
    fn parses_display_prices() {
        assert_eq!(parse_price("$1,250,000"), 1_250_000);
        assert_eq!(parse_price("$2,100 per week"), 2_100);
        assert_eq!(parse_price("$650000"), 650_000);
        assert_eq!(parse_price(" A$ 720,000"), 720_000);
        assert_eq!(parse_price("480000"), 480_000);
        assert_eq!(parse_price("Contact agent"), 0);
        assert_eq!(parse_price("Auction"), 0);
        assert_eq!(parse_price(""), 0);
    }

    #[test]
    fn non_ascii_digits_are_not_prices() {
        assert_eq!(parse_price("$٦٥٠,٠٠٠"), 0);
        assert_eq!(parse_price("٦٥٠"), 0);
        assert_eq!(parse_price("$99999999999999999999999"), 0);
    }

    #[test]
    fn unparsable_price_counts_as_zero() {
        let unknown = with_price("Contact agent");

        assert!(matches(&unknown, &SearchCriteria::default()));
        assert!(!matches(
            &unknown,
            &SearchCriteria {
                price_range: (1, 3_000_000),
                ..SearchCriteria::default()
            }
        ));
    }

    #[test]
    fn property_type_filter_parsing() {
        assert_eq!("all".parse::<PropertyTypeFilter>().unwrap(), PropertyTypeFilter::All);
        assert_eq!("".parse::<PropertyTypeFilter>().unwrap(), PropertyTypeFilter::All);
        assert_eq!(
            "Townhouse".parse::<PropertyTypeFilter>().unwrap(),
            PropertyTypeFilter::Only(PropertyType::Townhouse)
        );
        assert!("Castle".parse::<PropertyTypeFilter>().is_err());
        assert_eq!(PropertyTypeFilter::All.to_string(), "all");
        assert_eq!(PropertyTypeFilter::Only(PropertyType::Land).to_string(), "Land");
    }
}
