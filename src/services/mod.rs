pub mod filter;
pub mod normalize;
pub mod search;
pub mod session;
