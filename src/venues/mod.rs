//! Venue provider gateway.
//!
//! Fetches a venue's static (location) and dynamic (pricing) data and turns
//! them into a [`VenuePricingSpec`](crate::pricing::models::VenuePricingSpec).

pub mod client;
pub mod error;
pub mod payload;

pub use client::VenueClient;
pub use error::VenueError;
