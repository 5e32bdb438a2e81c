//! Request DTOs for the pricing API endpoint.

use std::str::FromStr;

use serde::Deserialize;

use super::errors::PricingError;
use super::models::PriceRequest;

/// How the `cart_value` query parameter is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CartValueMode {
    /// Parse as a float and truncate toward zero (`"1000.12"` is 1000).
    #[default]
    Truncate,
    /// Accept integers only (`"1000.12"` is rejected).
    Strict,
}

impl FromStr for CartValueMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "strict" => Ok(Self::Strict),
            other => Err(format!("expected 'truncate' or 'strict', got '{other}'")),
        }
    }
}

/// Raw query parameters of `GET /api/v1/delivery-order-price`.
///
/// Everything arrives as text; typing happens in [`PriceQuery::into_price_request`].
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    #[serde(default)]
    pub venue_slug: Option<String>,
    #[serde(default)]
    pub cart_value: Option<String>,
    #[serde(default)]
    pub user_lat: Option<String>,
    #[serde(default)]
    pub user_lon: Option<String>,
}

impl PriceQuery {
    /// Parse every parameter to its type, then validate the result.
    ///
    /// Type failures are [`PricingError::InvalidParameterType`] and are
    /// reported before any value check runs.
    pub fn into_price_request(self, mode: CartValueMode) -> Result<PriceRequest, PricingError> {
        let venue_slug = self
            .venue_slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
            .ok_or(PricingError::InvalidParameterType)?
            .to_string();
        let cart_value = parse_cart_value(required(self.cart_value.as_deref())?, mode)?;
        let user_lat = parse_degrees(required(self.user_lat.as_deref())?)?;
        let user_lon = parse_degrees(required(self.user_lon.as_deref())?)?;

        PriceRequest::new(venue_slug, cart_value, user_lat, user_lon)
    }
}

fn required(value: Option<&str>) -> Result<&str, PricingError> {
    value
        .map(str::trim)
        .ok_or(PricingError::InvalidParameterType)
}

fn parse_cart_value(raw: &str, mode: CartValueMode) -> Result<i64, PricingError> {
    match mode {
        CartValueMode::Strict => raw
            .parse::<i64>()
            .map_err(|_| PricingError::InvalidParameterType),
        CartValueMode::Truncate => {
            let value = raw
                .parse::<f64>()
                .map_err(|_| PricingError::InvalidParameterType)?;
            let truncated = value.trunc();
            // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
            if !truncated.is_finite()
                || truncated < i64::MIN as f64
                || truncated >= i64::MAX as f64
            {
                return Err(PricingError::InvalidParameterType);
            }
            Ok(truncated as i64)
        }
    }
}

fn parse_degrees(raw: &str) -> Result<f64, PricingError> {
    raw.parse::<f64>()
        .map_err(|_| PricingError::InvalidParameterType)
}
