pub mod config;
pub mod errors;
pub mod logger;
pub mod models;
pub mod sample_data;
pub mod services;
pub mod upstream;
pub mod web;

pub use models::criteria::{PropertyTypeFilter, SearchCriteria};
pub use models::external::ExternalRecord;
pub use models::property::{Coordinates, ListingType, NormalizedProperty, PropertyType};
pub use services::filter::filter;
pub use services::normalize::normalize;
pub use services::search::PropertyService;
pub use services::session::SearchSession;
