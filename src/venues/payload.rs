//! Venue provider response shapes.
//!
//! Only the fields pricing needs are modelled; everything else is ignored.

use serde::Deserialize;

use crate::pricing::models::{Coordinate, DistanceRange, VenuePricingSpec};

use super::error::VenueError;

/// Body of `GET <base>/<slug>/static`
#[derive(Debug, Clone, Deserialize)]
pub struct StaticVenueResponse {
    pub venue_raw: StaticVenueRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticVenueRaw {
    pub location: VenueLocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueLocation {
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

/// Body of `GET <base>/<slug>/dynamic`
#[derive(Debug, Clone, Deserialize)]
pub struct DynamicVenueResponse {
    pub venue_raw: DynamicVenueRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DynamicVenueRaw {
    pub delivery_specs: DeliverySpecs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliverySpecs {
    pub order_minimum_no_surcharge: i64,
    pub delivery_pricing: DeliveryPricing,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryPricing {
    pub base_price: i64,
    pub distance_ranges: Vec<DistanceRangePayload>,
}

/// A tier as sent upstream; `max == 0` marks the open-ended tier.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DistanceRangePayload {
    pub min: i64,
    pub max: i64,
    pub a: i64,
    pub b: i64,
}

impl From<DistanceRangePayload> for DistanceRange {
    fn from(payload: DistanceRangePayload) -> Self {
        Self {
            min: payload.min,
            max: (payload.max != 0).then_some(payload.max),
            a: payload.a,
            b: payload.b,
        }
    }
}

/// Combine both venue payloads into pricing rules.
///
/// # Errors
///
/// [`VenueError::InvalidPayload`] when the venue coordinates are out of
/// bounds, there are no distance ranges, or range minimums do not strictly
/// increase.
pub fn into_pricing_spec(
    static_data: StaticVenueResponse,
    dynamic_data: DynamicVenueResponse,
) -> Result<VenuePricingSpec, VenueError> {
    let [longitude, latitude] = static_data.venue_raw.location.coordinates;
    let venue_coordinate = Coordinate::new(latitude, longitude).map_err(|_| {
        VenueError::InvalidPayload(format!(
            "venue coordinates out of bounds: [{longitude}, {latitude}]"
        ))
    })?;

    let specs = dynamic_data.venue_raw.delivery_specs;
    let distance_ranges: Vec<DistanceRange> = specs
        .delivery_pricing
        .distance_ranges
        .into_iter()
        .map(DistanceRange::from)
        .collect();

    if distance_ranges.is_empty() {
        return Err(VenueError::InvalidPayload(
            "distance_ranges is empty".to_string(),
        ));
    }
    if distance_ranges.windows(2).any(|pair| pair[0].min >= pair[1].min) {
        return Err(VenueError::InvalidPayload(
            "distance_ranges minimums are not strictly increasing".to_string(),
        ));
    }

    Ok(VenuePricingSpec {
        venue_coordinate,
        order_minimum_no_surcharge: specs.order_minimum_no_surcharge,
        base_price: specs.delivery_pricing.base_price,
        distance_ranges,
    })
}
