//! Delivery pricing engine.
//!
//! Validates a price request, measures the geodesic distance to the venue,
//! picks the distance tier and sums cart value, surcharge and delivery fee.

pub mod calculators;
pub mod distance;
pub mod errors;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_price, round_money};
pub use errors::PricingError;
pub use requests::CartValueMode;
pub use routes::router;
pub use services::quote_delivery_price;
