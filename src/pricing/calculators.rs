//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no network access.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::distance::distance_meters;
use super::errors::PricingError;
use super::models::{DeliveryQuote, DistanceRange, PriceRequest, PriceResult, VenuePricingSpec};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use dopc_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Extra charge for carts below the venue minimum. Never negative.
pub fn small_order_surcharge(order_minimum: i64, cart_value: i64) -> Result<i64, PricingError> {
    let shortfall = order_minimum
        .checked_sub(cart_value)
        .ok_or(PricingError::PriceOverflow)?;
    Ok(shortfall.max(0))
}

/// First tier containing `distance`, scanning in order.
pub fn select_range(ranges: &[DistanceRange], distance: i64) -> Option<&DistanceRange> {
    ranges.iter().find(|range| range.contains(distance))
}

/// Delivery fee for a tier: `base_price + a + round(b * distance / 10)`.
///
/// The distance component is computed exactly and rounded half-to-even.
pub fn delivery_fee(
    base_price: i64,
    range: &DistanceRange,
    distance: i64,
) -> Result<i64, PricingError> {
    let distance_component = Decimal::from(range.b)
        .checked_mul(Decimal::from(distance))
        .and_then(|product| product.checked_div(Decimal::TEN))
        .map(|quotient| round_money(quotient, 0))
        .and_then(|rounded| rounded.to_i64())
        .ok_or(PricingError::PriceOverflow)?;

    base_price
        .checked_add(range.a)
        .and_then(|fee| fee.checked_add(distance_component))
        .ok_or(PricingError::PriceOverflow)
}

/// Price a validated request against a venue's pricing rules.
///
/// Computes the delivery distance, rejects distances beyond the venue's
/// configured radius, selects the tier and sums cart value, surcharge and fee.
pub fn calculate_price(
    request: &PriceRequest,
    spec: &VenuePricingSpec,
) -> Result<PriceResult, PricingError> {
    let distance = distance_meters(request.user_location, spec.venue_coordinate);

    let max_distance = spec
        .max_distance()
        .ok_or(PricingError::NoApplicableTier { distance })?;
    if distance > max_distance {
        return Err(PricingError::DistanceExceedsRange {
            distance,
            max_distance,
        });
    }

    let range = select_range(&spec.distance_ranges, distance)
        .ok_or(PricingError::NoApplicableTier { distance })?;
    let fee = delivery_fee(spec.base_price, range, distance)?;

    let surcharge = small_order_surcharge(spec.order_minimum_no_surcharge, request.cart_value)?;

    let total_price = request
        .cart_value
        .checked_add(surcharge)
        .and_then(|total| total.checked_add(fee))
        .ok_or(PricingError::PriceOverflow)?;

    Ok(PriceResult {
        total_price,
        small_order_surcharge: surcharge,
        cart_value: request.cart_value,
        delivery: DeliveryQuote { fee, distance },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::Coordinate;
    use rust_decimal_macros::dec;

    const VENUE_LAT: f64 = 52.5003197;
    const VENUE_LON: f64 = 13.4536149;

    fn range(min: i64, max: Option<i64>, a: i64, b: i64) -> DistanceRange {
        DistanceRange { min, max, a, b }
    }

    fn berlin_spec() -> VenuePricingSpec {
        VenuePricingSpec {
            venue_coordinate: Coordinate::new(VENUE_LAT, VENUE_LON).unwrap(),
            order_minimum_no_surcharge: 1000,
            base_price: 190,
            distance_ranges: vec![
                range(0, Some(500), 0, 0),
                range(500, Some(1000), 100, 0),
                range(1000, Some(1500), 200, 0),
                range(1500, Some(2000), 200, 1),
                range(2000, None, 0, 0),
            ],
        }
    }

    fn request(cart_value: i64, lat: f64, lon: f64) -> PriceRequest {
        PriceRequest::new("home-assignment-venue-berlin", cart_value, lat, lon).unwrap()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(0.5), 0), dec!(0));
        assert_eq!(round_money(dec!(1.5), 0), dec!(2));
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.4), 0), dec!(1));
        assert_eq!(round_money(dec!(1.6), 0), dec!(2));
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== small_order_surcharge tests ====================

    #[test]
    fn test_surcharge_below_minimum() {
        assert_eq!(small_order_surcharge(1000, 800), Ok(200));
        assert_eq!(small_order_surcharge(1000, 1), Ok(999));
    }

    #[test]
    fn test_surcharge_never_negative() {
        assert_eq!(small_order_surcharge(1000, 1000), Ok(0));
        assert_eq!(small_order_surcharge(1000, 5000), Ok(0));
        assert_eq!(small_order_surcharge(0, 1), Ok(0));
    }

    // ==================== select_range tests ====================

    #[test]
    fn test_select_range_boundaries_are_lower_inclusive() {
        let spec = berlin_spec();
        let ranges = &spec.distance_ranges;
        assert_eq!(select_range(ranges, 0).map(|r| r.min), Some(0));
        assert_eq!(select_range(ranges, 499).map(|r| r.min), Some(0));
        assert_eq!(select_range(ranges, 500).map(|r| r.min), Some(500));
        assert_eq!(select_range(ranges, 1999).map(|r| r.min), Some(1500));
        assert_eq!(select_range(ranges, 2000).map(|r| r.min), Some(2000));
    }

    #[test]
    fn test_select_range_is_exclusive() {
        let spec = berlin_spec();
        for distance in 0..=2000 {
            let matches = spec
                .distance_ranges
                .iter()
                .filter(|r| r.contains(distance))
                .count();
            assert_eq!(matches, 1, "distance {distance}");
        }
    }

    #[test]
    fn test_select_range_gap_before_first_tier() {
        let ranges = vec![range(100, Some(500), 0, 0), range(500, None, 0, 0)];
        assert!(select_range(&ranges, 50).is_none());
    }

    // ==================== delivery_fee tests ====================

    #[test]
    fn test_delivery_fee_flat_tier() {
        assert_eq!(delivery_fee(190, &range(500, Some(1000), 100, 0), 750), Ok(290));
    }

    #[test]
    fn test_delivery_fee_distance_component() {
        // 190 + 200 + round(1 * 1730 / 10)
        assert_eq!(delivery_fee(190, &range(1500, Some(2000), 200, 1), 1730), Ok(563));
    }

    #[test]
    fn test_delivery_fee_half_quotients_round_to_even() {
        let tier = range(0, None, 0, 1);
        assert_eq!(delivery_fee(0, &tier, 5), Ok(0)); // 0.5
        assert_eq!(delivery_fee(0, &tier, 15), Ok(2)); // 1.5
        assert_eq!(delivery_fee(0, &tier, 25), Ok(2)); // 2.5
        assert_eq!(delivery_fee(0, &tier, 35), Ok(4)); // 3.5
    }

    #[test]
    fn test_delivery_fee_overflow() {
        let tier = range(0, None, i64::MAX, 0);
        assert_eq!(delivery_fee(1, &tier, 0), Err(PricingError::PriceOverflow));
    }

    // ==================== calculate_price tests ====================

    #[test]
    fn test_calculate_price_at_venue() {
        let result = calculate_price(&request(1000, VENUE_LAT, VENUE_LON), &berlin_spec()).unwrap();
        assert_eq!(result.delivery.distance, 0);
        assert_eq!(result.delivery.fee, 190);
        assert_eq!(result.small_order_surcharge, 0);
        assert_eq!(result.cart_value, 1000);
        assert_eq!(result.total_price, 1190);
    }

    #[test]
    fn test_calculate_price_small_order() {
        let result = calculate_price(&request(800, 52.5012207, VENUE_LON), &berlin_spec()).unwrap();
        assert_eq!(result.small_order_surcharge, 200);
        assert_eq!(result.delivery.fee, 190);
        assert_eq!(result.total_price, 800 + 200 + 190);
    }

    #[test]
    fn test_calculate_price_total_is_sum_of_parts() {
        let spec = berlin_spec();
        for (cart, lat) in [(1, 52.501), (999, 52.504), (2500, 52.509), (10_000, 52.512)] {
            let result = calculate_price(&request(cart, lat, VENUE_LON), &spec).unwrap();
            assert_eq!(
                result.total_price,
                result.cart_value + result.small_order_surcharge + result.delivery.fee
            );
            assert!(result.small_order_surcharge >= 0);
        }
    }

    #[test]
    fn test_calculate_price_is_idempotent() {
        let spec = berlin_spec();
        let req = request(1234, 52.5089, 13.4550);
        assert_eq!(calculate_price(&req, &spec), calculate_price(&req, &spec));
    }

    #[test]
    fn test_calculate_price_rejects_far_destination() {
        let result = calculate_price(&request(1000, 85.0, 179.0), &berlin_spec());
        assert!(matches!(
            result,
            Err(PricingError::DistanceExceedsRange { max_distance: 2000, .. })
        ));
    }

    #[test]
    fn test_calculate_price_max_distance_is_inclusive() {
        let req = request(1000, 52.5156, VENUE_LON);
        let distance = distance_meters(req.user_location, berlin_spec().venue_coordinate);
        assert!(distance > 1, "got {distance}");

        let mut spec = berlin_spec();
        spec.distance_ranges = vec![range(0, Some(distance), 0, 1), range(distance, None, 50, 0)];
        let result = calculate_price(&req, &spec).unwrap();
        assert_eq!(result.delivery.distance, distance);
        assert_eq!(result.delivery.fee, 190 + 50);

        spec.distance_ranges = vec![
            range(0, Some(distance - 1), 0, 1),
            range(distance - 1, None, 50, 0),
        ];
        assert_eq!(
            calculate_price(&req, &spec),
            Err(PricingError::DistanceExceedsRange {
                distance,
                max_distance: distance - 1,
            })
        );
    }

    #[test]
    fn test_calculate_price_no_applicable_tier() {
        let mut spec = berlin_spec();
        spec.distance_ranges = vec![range(100, Some(500), 0, 0), range(500, None, 0, 0)];
        let result = calculate_price(&request(1000, VENUE_LAT, VENUE_LON), &spec);
        assert_eq!(result, Err(PricingError::NoApplicableTier { distance: 0 }));
    }
}
