//! Domain models for delivery pricing.
//!
//! All values are created per request and discarded with the response.

use super::errors::PricingError;

/// Geographic point in decimal degrees.
///
/// Construction through [`Coordinate::new`] guarantees the latitude is within
/// `[-90, 90]` and the longitude within `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN and out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PricingError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(PricingError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// One distance tier of a venue's delivery pricing.
///
/// `max` is `None` for the open-ended tier (upstream encodes it as `max: 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRange {
    pub min: i64,
    pub max: Option<i64>,
    /// Flat amount added to the base price.
    pub a: i64,
    /// Per-10-meter multiplier.
    pub b: i64,
}

impl DistanceRange {
    /// Lower bound inclusive, upper bound exclusive, open tier unbounded above.
    pub fn contains(&self, distance: i64) -> bool {
        if distance < self.min {
            return false;
        }
        match self.max {
            Some(max) => distance < max,
            None => true,
        }
    }
}

/// Pricing rules of a venue as of fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct VenuePricingSpec {
    pub venue_coordinate: Coordinate,
    pub order_minimum_no_surcharge: i64,
    pub base_price: i64,
    /// Ascending by `min`, never empty.
    pub distance_ranges: Vec<DistanceRange>,
}

impl VenuePricingSpec {
    /// Farthest deliverable distance: the `min` of the last tier.
    pub fn max_distance(&self) -> Option<i64> {
        self.distance_ranges.last().map(|range| range.min)
    }
}

/// A validated price request.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub venue_slug: String,
    pub cart_value: i64,
    pub user_location: Coordinate,
}

impl PriceRequest {
    /// Validate cart value then coordinates, in that order.
    pub fn new(
        venue_slug: impl Into<String>,
        cart_value: i64,
        user_lat: f64,
        user_lon: f64,
    ) -> Result<Self, PricingError> {
        if cart_value <= 0 {
            return Err(PricingError::InvalidCartValue);
        }
        let user_location = Coordinate::new(user_lat, user_lon)?;
        Ok(Self {
            venue_slug: venue_slug.into(),
            cart_value,
            user_location,
        })
    }
}

/// Delivery part of a price quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryQuote {
    pub fee: i64,
    /// Meters, truncated.
    pub distance: i64,
}

/// Result of a successful price calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceResult {
    pub total_price: i64,
    pub small_order_surcharge: i64,
    pub cart_value: i64,
    pub delivery: DeliveryQuote,
}
