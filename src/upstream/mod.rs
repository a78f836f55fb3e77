pub mod client;
pub mod repair;

pub use client::UpstreamClient;
