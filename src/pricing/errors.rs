//! Pricing failure taxonomy.

use thiserror::Error;

/// Why a price quote could not be produced.
///
/// Every variant is local to a single request; none is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// A required parameter is missing or does not parse to its type.
    #[error("Invalid parameter data type")]
    InvalidParameterType,

    #[error("Invalid cart value")]
    InvalidCartValue,

    #[error("Invalid coordinates")]
    InvalidCoordinates,

    /// The venue provider could not supply both static and dynamic data.
    #[error("Unable to fetch venue data")]
    VenueUnavailable,

    #[error("Delivery distance exceeds the allowed range.")]
    DistanceExceedsRange { distance: i64, max_distance: i64 },

    #[error("Delivery not available for this distance")]
    NoApplicableTier { distance: i64 },

    /// Checked integer arithmetic overflowed on upstream coefficients.
    #[error("Calculated price is out of range")]
    PriceOverflow,
}
