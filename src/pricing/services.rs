//! Pricing service functions with venue provider access.
//!
//! These functions fetch venue pricing rules and hand them to the pure
//! calculators. Nothing is cached: every quote reads the provider afresh.

use tracing::{debug, info, warn};

use crate::venues::VenueClient;

use super::calculators::calculate_price;
use super::errors::PricingError;
use super::models::{PriceRequest, PriceResult};

/// Quote the total price of a delivery order.
///
/// The request is already type-checked and validated; this resolves the
/// venue and prices the order against its current rules.
///
/// # Errors
///
/// - [`PricingError::VenueUnavailable`] if either venue fetch fails.
/// - [`PricingError::DistanceExceedsRange`] / [`PricingError::NoApplicableTier`]
///   if the venue does not deliver to the user's location.
pub async fn quote_delivery_price(
    venues: &VenueClient,
    request: &PriceRequest,
) -> Result<PriceResult, PricingError> {
    let spec = venues
        .fetch_pricing_spec(&request.venue_slug)
        .await
        .map_err(|e| {
            warn!(venue_slug = %request.venue_slug, error = %e, "venue data unavailable");
            PricingError::VenueUnavailable
        })?;

    match calculate_price(request, &spec) {
        Ok(result) => {
            info!(
                venue_slug = %request.venue_slug,
                distance = result.delivery.distance,
                total_price = result.total_price,
                "delivery price quoted"
            );
            Ok(result)
        }
        Err(e) => {
            debug!(venue_slug = %request.venue_slug, error = ?e, "delivery price rejected");
            Err(e)
        }
    }
}
