pub mod criteria;
pub mod external;
pub mod property;
